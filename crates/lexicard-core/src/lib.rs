//! lexicard-core — Word cards, translations, and navigation.
//!
//! This crate normalizes loosely-shaped word lists into canonical cards and
//! provides the pieces the exercise pages run on: UI language, per-page
//! translations, route history, and asset loading.

pub mod config;
pub mod context;
pub mod deck;
pub mod error;
pub mod i18n;
pub mod language;
pub mod mock;
pub mod model;
pub mod normalize;
pub mod routing;
pub mod source;

pub use context::AppContext;
pub use model::{AppLanguage, LocalizedName, WordCard};
pub use normalize::{normalize_word_cards, WordSource};
