//! Core data model types for lexicard.
//!
//! These are the types the rest of the system passes around: the canonical
//! word card, the UI language, and names that carry their own translations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One vocabulary entry in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCard {
    /// Identifier, unique within one normalization run.
    pub id: i64,
    /// Prompt side. Never empty, always trimmed.
    pub russian: String,
    /// Accepted answers. At least one, each non-empty and trimmed.
    pub english: Vec<String>,
}

impl WordCard {
    /// Returns `true` if `answer` matches one of the accepted answers,
    /// ignoring surrounding whitespace and case.
    pub fn accepts(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.english
            .iter()
            .any(|candidate| candidate.to_lowercase() == answer)
    }
}

/// UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppLanguage {
    #[default]
    Ru,
    En,
}

impl AppLanguage {
    /// Interpret an HTML-style `lang` attribute.
    ///
    /// Anything starting with `en` (`en`, `en-US`, ...) is English; every
    /// other value, including a missing one, is Russian.
    pub fn from_attribute(attr: Option<&str>) -> Self {
        match attr {
            Some(lang) if lang.starts_with("en") => AppLanguage::En,
            _ => AppLanguage::Ru,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            AppLanguage::Ru => "ru",
            AppLanguage::En => "en",
        }
    }
}

impl fmt::Display for AppLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AppLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" => Ok(AppLanguage::Ru),
            "en" | "english" => Ok(AppLanguage::En),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// A display name that is either fixed or translated per language.
///
/// Theme and exercise names in the word data use this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedName {
    Plain(String),
    Translated {
        #[serde(default)]
        ru: String,
        #[serde(default)]
        en: String,
    },
}

impl LocalizedName {
    /// Resolve the name for `lang`, falling back to Russian, then English,
    /// then the empty string.
    pub fn resolve(&self, lang: AppLanguage) -> &str {
        match self {
            LocalizedName::Plain(name) => name,
            LocalizedName::Translated { ru, en } => {
                let preferred = match lang {
                    AppLanguage::Ru => ru,
                    AppLanguage::En => en,
                };
                [preferred, ru, en]
                    .into_iter()
                    .find(|s| !s.is_empty())
                    .map(String::as_str)
                    .unwrap_or("")
            }
        }
    }
}

impl From<&str> for LocalizedName {
    fn from(name: &str) -> Self {
        LocalizedName::Plain(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_attribute() {
        assert_eq!(AppLanguage::from_attribute(Some("en")), AppLanguage::En);
        assert_eq!(AppLanguage::from_attribute(Some("en-GB")), AppLanguage::En);
        assert_eq!(AppLanguage::from_attribute(Some("ru")), AppLanguage::Ru);
        assert_eq!(AppLanguage::from_attribute(Some("de")), AppLanguage::Ru);
        assert_eq!(AppLanguage::from_attribute(Some("")), AppLanguage::Ru);
        assert_eq!(AppLanguage::from_attribute(None), AppLanguage::Ru);
    }

    #[test]
    fn language_display_and_parse() {
        assert_eq!(AppLanguage::En.to_string(), "en");
        assert_eq!("RU".parse::<AppLanguage>().unwrap(), AppLanguage::Ru);
        assert_eq!("english".parse::<AppLanguage>().unwrap(), AppLanguage::En);
        assert!("fr".parse::<AppLanguage>().is_err());
    }

    #[test]
    fn localized_name_fallbacks() {
        let both = LocalizedName::Translated {
            ru: "Животные".into(),
            en: "Animals".into(),
        };
        assert_eq!(both.resolve(AppLanguage::Ru), "Животные");
        assert_eq!(both.resolve(AppLanguage::En), "Animals");

        let ru_only = LocalizedName::Translated {
            ru: "Еда".into(),
            en: String::new(),
        };
        assert_eq!(ru_only.resolve(AppLanguage::En), "Еда");

        let en_only = LocalizedName::Translated {
            ru: String::new(),
            en: "Food".into(),
        };
        assert_eq!(en_only.resolve(AppLanguage::Ru), "Food");

        let empty = LocalizedName::Translated {
            ru: String::new(),
            en: String::new(),
        };
        assert_eq!(empty.resolve(AppLanguage::En), "");

        assert_eq!(LocalizedName::from("Цвета").resolve(AppLanguage::En), "Цвета");
    }

    #[test]
    fn localized_name_deserializes_both_shapes() {
        let plain: LocalizedName = serde_json::from_str(r#""Дом""#).unwrap();
        assert_eq!(plain, LocalizedName::Plain("Дом".into()));

        let translated: LocalizedName =
            serde_json::from_str(r#"{"ru": "Дом", "en": "Home"}"#).unwrap();
        assert_eq!(translated.resolve(AppLanguage::En), "Home");
    }

    #[test]
    fn card_accepts_answers() {
        let card = WordCard {
            id: 1,
            russian: "кот".into(),
            english: vec!["cat".into(), "tomcat".into()],
        };
        assert!(card.accepts(" Cat "));
        assert!(card.accepts("tomcat"));
        assert!(!card.accepts("dog"));
    }

    #[test]
    fn word_card_serde_roundtrip() {
        let card = WordCard {
            id: 7,
            russian: "дом".into(),
            english: vec!["house".into()],
        };
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":7,"russian":"дом","english":["house"]}"#);
        let back: WordCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
