//! The `lexicard init` command.

use std::path::Path;

use anyhow::Result;

use lexicard_core::i18n::PageName;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("lexicard.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("assets/words/words.json"), SAMPLE_WORDS)?;

    for page in PageName::ALL {
        let path = Path::new("assets").join(page.asset_path());
        write_if_missing(&path, page_translations(page))?;
    }

    println!("\nNext steps:");
    println!("  1. Add words to assets/words/words.json");
    println!("  2. Run: lexicard validate --words assets/words");
    println!("  3. Run: lexicard cards --file assets/words/words.json");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("Created {}", path.display());
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# lexicard configuration

assets_dir = "./assets"
default_language = "ru"
words_path = "words/words.json"

# Fetch assets from a remote checkout instead of assets_dir:
# remote_base = "https://raw.githubusercontent.com/you/words/main"
"#;

const SAMPLE_WORDS: &str = r#"[
  "кот | cat, tomcat",
  "дом - house",
  ["вода", "water"],
  { "russian": "хлеб", "english": ["bread"] }
]
"#;

fn page_translations(page: PageName) -> &'static str {
    match page {
        PageName::Main => {
            r#"{
  "ru": { "title": "Главная", "exercises": { "cards": "Карточки", "memorization": "Заучивание", "spelling": "Написание", "selection": "Подбор" } },
  "en": { "title": "Home", "exercises": { "cards": "Cards", "memorization": "Memorization", "spelling": "Spelling", "selection": "Selection" } }
}
"#
        }
        PageName::Cards => {
            r#"{
  "ru": { "title": "Карточки", "buttons": { "flip": "Перевернуть", "next": "Дальше" } },
  "en": { "title": "Cards", "buttons": { "flip": "Flip", "next": "Next" } }
}
"#
        }
        PageName::Memorization => {
            r#"{
  "ru": { "title": "Заучивание", "buttons": { "know": "Знаю", "repeat": "Повторить" } },
  "en": { "title": "Memorization", "buttons": { "know": "I know it", "repeat": "Repeat" } }
}
"#
        }
        PageName::Selection => {
            r#"{
  "ru": { "title": "Подбор", "hint": "Выберите перевод" },
  "en": { "title": "Selection", "hint": "Pick the translation" }
}
"#
        }
        PageName::Spelling => {
            r#"{
  "ru": { "title": "Написание", "placeholder": "Введите перевод", "buttons": { "check": "Проверить" } },
  "en": { "title": "Spelling", "placeholder": "Type the translation", "buttons": { "check": "Check" } }
}
"#
        }
    }
}
