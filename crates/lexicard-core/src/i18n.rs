//! Per-page UI translations.
//!
//! Each page ships a JSON table shaped `{ "ru": {...}, "en": {...} }`.
//! Keys are looked up with dot paths (`"buttons.next"`); any miss returns
//! the key itself so a missing string is visible but harmless.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoadError;
use crate::language::LanguageWatch;
use crate::model::AppLanguage;
use crate::source::DataSource;

/// Pages that carry their own translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageName {
    Main,
    Cards,
    Memorization,
    Selection,
    Spelling,
}

impl PageName {
    pub const ALL: [PageName; 5] = [
        PageName::Main,
        PageName::Cards,
        PageName::Memorization,
        PageName::Selection,
        PageName::Spelling,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageName::Main => "main",
            PageName::Cards => "cards",
            PageName::Memorization => "memorization",
            PageName::Selection => "selection",
            PageName::Spelling => "spelling",
        }
    }

    /// Location of the page's table relative to the data root.
    pub fn asset_path(self) -> String {
        let name = self.as_str();
        format!("pages/{name}/ui/{name}.json")
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageName::ALL
            .into_iter()
            .find(|page| page.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("no translations for page: {s}"))
    }
}

/// Translation tables for both languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Translations {
    #[serde(default)]
    pub ru: Value,
    #[serde(default)]
    pub en: Value,
}

impl Translations {
    fn table(&self, lang: AppLanguage) -> &Value {
        match lang {
            AppLanguage::Ru => &self.ru,
            AppLanguage::En => &self.en,
        }
    }

    /// Look up a dotted key; returns the key when it does not resolve to a
    /// string.
    pub fn lookup(&self, lang: AppLanguage, key: &str) -> String {
        let table = self.table(lang);
        if table.is_null() {
            return key.to_string();
        }

        let mut value = table;
        for segment in key.split('.') {
            match child(value, segment) {
                Some(next) => value = next,
                None => return key.to_string(),
            }
        }

        value.as_str().map(str::to_string).unwrap_or_else(|| key.to_string())
    }
}

/// Step into an object field, or an array element for a canonical index.
fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Array(items) => {
            let index: usize = segment.parse().ok()?;
            if index.to_string() != segment {
                return None;
            }
            items.get(index)
        }
        _ => value.get(segment),
    }
}

/// The translation state of one page.
#[derive(Debug)]
pub struct PageTranslations {
    page: PageName,
    language: LanguageWatch,
    translations: Option<Translations>,
    error: Option<LoadError>,
}

impl PageTranslations {
    pub fn new(page: PageName, language: LanguageWatch) -> Self {
        Self {
            page,
            language,
            translations: None,
            error: None,
        }
    }

    /// Fetch the page's table. On failure the error is kept and earlier
    /// translations stay in place.
    pub async fn load(&mut self, source: &dyn DataSource) {
        self.error = None;

        let page = self.page;
        let path = page.asset_path();
        let result = source.fetch_json(&path).await.and_then(|value| {
            serde_json::from_value::<Translations>(value).map_err(|e| LoadError::Parse {
                location: path.clone(),
                message: e.to_string(),
            })
        });

        match result {
            Ok(translations) => {
                tracing::debug!(%page, "translations loaded");
                self.translations = Some(translations);
            }
            Err(e) => {
                tracing::error!(%page, "error loading translations: {e}");
                self.error = Some(e);
            }
        }
    }

    pub async fn reload(&mut self, source: &dyn DataSource) {
        self.load(source).await;
    }

    /// Translate `key` in the current language.
    pub fn t(&self, key: &str) -> String {
        match &self.translations {
            Some(translations) => translations.lookup(self.language.current(), key),
            None => key.to_string(),
        }
    }

    pub fn page(&self) -> PageName {
        self.page
    }

    pub fn translations(&self) -> Option<&Translations> {
        self.translations.as_ref()
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn current_language(&self) -> AppLanguage {
        self.language.current()
    }
}
