//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::AppLanguage;

/// Top-level lexicard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicardConfig {
    /// Directory holding bundled word lists and page translations.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Base URL to fetch assets from instead of `assets_dir`.
    #[serde(default)]
    pub remote_base: Option<String>,
    /// UI language at startup.
    #[serde(default)]
    pub default_language: AppLanguage,
    /// Word list loaded by the card pages, relative to the data root.
    #[serde(default = "default_words_path")]
    pub words_path: String,
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./assets")
}

fn default_words_path() -> String {
    "words/words.json".to_string()
}

impl Default for LexicardConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            remote_base: None,
            default_language: AppLanguage::default(),
            words_path: default_words_path(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        from = start + value.len();
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `lexicard.toml` in the current directory
/// 2. `~/.config/lexicard/config.toml`
///
/// Environment variable overrides: `LEXICARD_REMOTE_BASE`, `LEXICARD_LANG`.
pub fn load_config() -> Result<LexicardConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LexicardConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("lexicard.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => LexicardConfig::default(),
    };

    apply_env_overrides(config)
}

/// Parse a TOML config and resolve `${VAR}` references in it.
pub fn parse_config_str(content: &str) -> Result<LexicardConfig> {
    let mut config: LexicardConfig = toml::from_str(content)?;

    config.assets_dir = PathBuf::from(resolve_env_vars(&config.assets_dir.to_string_lossy()));
    config.remote_base = config.remote_base.as_deref().map(resolve_env_vars);
    config.words_path = resolve_env_vars(&config.words_path);

    Ok(config)
}

fn apply_env_overrides(mut config: LexicardConfig) -> Result<LexicardConfig> {
    if let Ok(base) = std::env::var("LEXICARD_REMOTE_BASE") {
        config.remote_base = if base.is_empty() { None } else { Some(base) };
    }

    if let Ok(lang) = std::env::var("LEXICARD_LANG") {
        config.default_language = lang
            .parse()
            .map_err(|e: String| anyhow::anyhow!("LEXICARD_LANG: {e}"))?;
    }

    if config.remote_base.as_deref() == Some("") {
        config.remote_base = None;
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lexicard"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_LEXICARD_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_LEXICARD_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_LEXICARD_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("${_LEXICARD_UNSET_VAR}/x"), "/x");
        assert_eq!(resolve_env_vars("no ${closing"), "no ${closing");
        std::env::remove_var("_LEXICARD_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = LexicardConfig::default();
        assert_eq!(config.assets_dir, PathBuf::from("./assets"));
        assert_eq!(config.words_path, "words/words.json");
        assert_eq!(config.default_language, AppLanguage::Ru);
        assert!(config.remote_base.is_none());
    }

    #[test]
    fn parse_full_config() {
        std::env::set_var("_LEXICARD_TEST_HOST", "cdn.test");
        let config = parse_config_str(
            r#"
assets_dir = "/srv/lexicard"
remote_base = "https://${_LEXICARD_TEST_HOST}/data"
default_language = "en"
words_path = "words/animals.json"
"#,
        )
        .unwrap();
        std::env::remove_var("_LEXICARD_TEST_HOST");

        assert_eq!(config.assets_dir, PathBuf::from("/srv/lexicard"));
        assert_eq!(config.remote_base.as_deref(), Some("https://cdn.test/data"));
        assert_eq!(config.default_language, AppLanguage::En);
        assert_eq!(config.words_path, "words/animals.json");
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config_str("").unwrap(), LexicardConfig::default());
    }

    #[test]
    fn parse_rejects_unknown_language() {
        assert!(parse_config_str(r#"default_language = "fr""#).is_err());
    }

    #[test]
    fn explicit_missing_path_is_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicard.toml");
        std::fs::write(&path, "words_path = \"words/food.json\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.words_path, "words/food.json");
    }
}
