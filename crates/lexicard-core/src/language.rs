//! Current UI language with change notification.
//!
//! One [`LanguageProvider`] owns the value; any number of [`LanguageWatch`]
//! handles read it or wait for it to change. Last write wins.

use tokio::sync::watch;

use crate::model::{AppLanguage, LocalizedName};

/// Owner of the current UI language.
#[derive(Debug)]
pub struct LanguageProvider {
    tx: watch::Sender<AppLanguage>,
}

impl LanguageProvider {
    pub fn new(initial: AppLanguage) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> AppLanguage {
        *self.tx.borrow()
    }

    pub fn is_russian(&self) -> bool {
        self.current() == AppLanguage::Ru
    }

    pub fn is_english(&self) -> bool {
        self.current() == AppLanguage::En
    }

    /// Switch language. Subscribers are woken only when the value changes.
    ///
    /// Returns `true` if the language changed.
    pub fn set_language(&self, lang: AppLanguage) -> bool {
        let changed = self.tx.send_if_modified(|current| {
            if *current == lang {
                false
            } else {
                *current = lang;
                true
            }
        });
        if changed {
            tracing::debug!(language = %lang, "language changed");
        }
        changed
    }

    /// Apply an HTML-style `lang` attribute value.
    pub fn set_from_attribute(&self, attr: Option<&str>) -> bool {
        self.set_language(AppLanguage::from_attribute(attr))
    }

    pub fn subscribe(&self) -> LanguageWatch {
        LanguageWatch {
            rx: self.tx.subscribe(),
        }
    }

    /// Resolve a theme or exercise name in the current language.
    pub fn localize(&self, name: &LocalizedName) -> String {
        name.resolve(self.current()).to_string()
    }
}

impl Default for LanguageProvider {
    fn default() -> Self {
        Self::new(AppLanguage::default())
    }
}

/// Read side of a [`LanguageProvider`].
#[derive(Debug, Clone)]
pub struct LanguageWatch {
    rx: watch::Receiver<AppLanguage>,
}

impl LanguageWatch {
    pub fn current(&self) -> AppLanguage {
        *self.rx.borrow()
    }

    /// Wait for the next change and return the new language.
    ///
    /// Returns `None` once the provider has been dropped.
    pub async fn changed(&mut self) -> Option<AppLanguage> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Whether a change happened since the last [`changed`](Self::changed).
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}
