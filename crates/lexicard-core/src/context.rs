//! Application context.
//!
//! Built once at startup and handed to whatever needs language, routing, or
//! data access.

use anyhow::{Context, Result};
use futures::future::join_all;

use crate::config::LexicardConfig;
use crate::error::NavigationError;
use crate::i18n::{PageName, PageTranslations};
use crate::language::LanguageProvider;
use crate::model::WordCard;
use crate::normalize::normalize_word_cards;
use crate::routing::{Navigation, Router};
use crate::source::{source_from_config, DataSource};

pub struct AppContext {
    config: LexicardConfig,
    language: LanguageProvider,
    router: Router,
    source: Box<dyn DataSource>,
}

impl AppContext {
    /// Build a context with the data source the config selects.
    pub fn from_config(config: LexicardConfig) -> Result<Self> {
        let source = source_from_config(&config).context("failed to create data source")?;
        Ok(Self::with_source(config, source))
    }

    pub fn with_source(config: LexicardConfig, source: Box<dyn DataSource>) -> Self {
        let language = LanguageProvider::new(config.default_language);
        Self {
            config,
            language,
            router: Router::new(),
            source,
        }
    }

    pub fn config(&self) -> &LexicardConfig {
        &self.config
    }

    pub fn language(&self) -> &LanguageProvider {
        &self.language
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    pub fn navigate(&mut self, path: &str) -> Result<Navigation, NavigationError> {
        self.router.navigate(path)
    }

    /// Fetch a word list and normalize it.
    pub async fn load_cards(&self, relative: &str) -> Result<Vec<WordCard>> {
        let data = self
            .source
            .fetch_json(relative)
            .await
            .with_context(|| format!("failed to load word list {relative}"))?;
        let cards = normalize_word_cards(data);
        tracing::debug!(path = relative, cards = cards.len(), "word list loaded");
        Ok(cards)
    }

    /// Load the configured default word list.
    pub async fn load_default_cards(&self) -> Result<Vec<WordCard>> {
        self.load_cards(&self.config.words_path).await
    }

    /// Create and load the translations of one page.
    pub async fn page_translations(&self, page: PageName) -> PageTranslations {
        let mut translations = PageTranslations::new(page, self.language.subscribe());
        translations.load(self.source.as_ref()).await;
        translations
    }

    /// Load several pages' translations concurrently.
    pub async fn preload_translations(&self, pages: &[PageName]) -> Vec<PageTranslations> {
        join_all(pages.iter().map(|&page| self.page_translations(page))).await
    }
}
