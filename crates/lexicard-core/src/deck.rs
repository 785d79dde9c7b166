//! Word list loader.
//!
//! Loads word lists from JSON files and directories and normalizes them
//! into decks of cards.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::WordCard;
use crate::normalize::WordSource;
use crate::source::strip_bom;

/// The cards read from one word list.
#[derive(Debug, Clone)]
pub struct Deck {
    /// File stem of the word list.
    pub name: String,
    /// Cards that survived normalization.
    pub cards: Vec<WordCard>,
    /// Raw entries in the source, valid or not.
    pub entry_count: usize,
}

impl Deck {
    /// Number of entries that did not become cards.
    pub fn dropped(&self) -> usize {
        self.entry_count.saturating_sub(self.cards.len())
    }
}

/// Parse a single JSON word list into a `Deck`.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list: {}", path.display()))?;

    parse_deck_str(&content, path)
}

/// Parse a JSON string into a `Deck` (useful for testing).
pub fn parse_deck_str(content: &str, source_path: &Path) -> Result<Deck> {
    let source: WordSource = serde_json::from_str(strip_bom(content))
        .with_context(|| format!("failed to parse JSON: {}", source_path.display()))?;

    let name = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Deck {
        name,
        cards: source.cards(),
        entry_count: source.entry_count(),
    })
}

/// Recursively load all `.json` word lists from a directory.
pub fn load_deck_directory(dir: &Path) -> Result<Vec<Deck>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    collect_json_files(dir, &mut paths)?;
    paths.sort();

    let mut decks = Vec::new();
    for path in paths {
        match load_deck(&path) {
            Ok(deck) => decks.push(deck),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(decks)
}

fn collect_json_files(dir: &Path, out: &mut Vec<std::path::PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();

        if path.is_dir() {
            collect_json_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MIXED_JSON: &str = r#"[
        "кот | cat, tomcat",
        "дом - house",
        "без перевода",
        ["вода", "water"],
        { "id": 10, "russian": "хлеб", "english": ["bread"] },
        null
    ]"#;

    #[test]
    fn parse_mixed_list() {
        let deck = parse_deck_str(MIXED_JSON, &PathBuf::from("animals.json")).unwrap();
        assert_eq!(deck.name, "animals");
        assert_eq!(deck.entry_count, 6);
        assert_eq!(deck.cards.len(), 4);
        assert_eq!(deck.dropped(), 2);
        assert_eq!(deck.cards[3].id, 10);
    }

    #[test]
    fn parse_mapping_list() {
        let deck = parse_deck_str(
            r#"{ "кот": "cat", "собака": ["dog", "hound"] }"#,
            &PathBuf::from("pets.json"),
        )
        .unwrap();
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[1].english, vec!["dog", "hound"]);
        assert_eq!(deck.dropped(), 0);
    }

    #[test]
    fn parse_list_with_byte_order_mark() {
        let deck =
            parse_deck_str("\u{feff}[\"кот | cat\"]", &PathBuf::from("bom.json")).unwrap();
        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].russian, "кот");
    }

    #[test]
    fn parse_scalar_list_is_empty_deck() {
        let deck = parse_deck_str("null", &PathBuf::from("empty.json")).unwrap();
        assert!(deck.cards.is_empty());
        assert_eq!(deck.entry_count, 0);
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_deck_str("[\"кот | cat\",", &PathBuf::from("bad.json"));
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn load_directory_recurses_and_skips_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), MIXED_JSON).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested/b.json"), r#"{"я": "I"}"#).unwrap();

        let decks = load_deck_directory(dir.path()).unwrap();
        let names: Vec<&str> = decks.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn load_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.json");
        std::fs::write(&file, "[]").unwrap();
        assert!(load_deck_directory(&file).is_err());
    }
}
