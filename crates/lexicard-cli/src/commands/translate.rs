//! The `lexicard translate` command.

use std::path::PathBuf;

use anyhow::Result;

use lexicard_core::config::load_config_from;
use lexicard_core::i18n::PageName;
use lexicard_core::{AppContext, AppLanguage};

pub async fn execute(
    page: String,
    key: String,
    lang: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let page: PageName = page.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let config = load_config_from(config_path.as_deref())?;
    let ctx = AppContext::from_config(config)?;

    if let Some(lang) = lang {
        let lang: AppLanguage = lang.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        ctx.language().set_language(lang);
    }

    let translations = ctx.page_translations(page).await;
    if let Some(e) = translations.error() {
        anyhow::bail!("failed to load translations for {page}: {e}");
    }

    println!("{}", translations.t(&key));
    Ok(())
}
