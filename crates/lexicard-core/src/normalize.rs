//! Word-card normalization.
//!
//! Word lists are hand-written JSON and come in several shapes:
//!
//! ```json
//! { "кот": ["cat", "tomcat"], "дом": "house, building" }
//! ["кот | cat, tomcat", "дом - house"]
//! [["кот", "cat", "tomcat"]]
//! [{ "id": 42, "russian": "кот", "english": "cat, tomcat" }]
//! ```
//!
//! The input is classified once into a [`WordSource`] and every shape is
//! reduced to [`WordCard`]s. Entries that cannot be read are dropped without
//! error; the output is best-effort.

use serde::Deserialize;
use serde_json::Value;

use crate::model::WordCard;

/// Raw word data, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum WordSource {
    /// `null`, `false`, `0`, `""`, or any other value that is neither an
    /// object nor an array.
    Empty,
    /// An object whose keys are prompts, in document order.
    Mapping(Vec<(String, EnglishCandidate)>),
    /// An array, one classified item per element.
    Sequence(Vec<RawItem>),
}

/// One element of a sequence-shaped word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawItem {
    /// `"кот | cat"` or `"кот - cat"`.
    Line(String),
    /// `["кот", "cat", "tomcat"]`. `russian` is `None` if the first element
    /// is missing or not a string.
    Tuple {
        russian: Option<String>,
        english: EnglishCandidate,
    },
    /// `{ "russian": "кот", "english": ..., "id": 42 }`.
    Record {
        id: Option<i64>,
        russian: String,
        english: EnglishCandidate,
    },
    /// Falsy elements, numbers, booleans, and objects without a string
    /// `russian` field.
    Skip,
}

/// The answer side of an entry before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnglishCandidate {
    /// An array; only its string elements are kept.
    List(Vec<String>),
    /// A single string holding comma-separated synonyms.
    Text(String),
    /// Absent, or a value of any other type.
    Missing,
}

impl From<Value> for WordSource {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let mut entries: Vec<_> = map
                    .into_iter()
                    .map(|(russian, english)| (russian, EnglishCandidate::from(english)))
                    .collect();
                entries.sort_by_key(|(key, _)| match array_index(key) {
                    Some(index) => (0, index),
                    None => (1, 0),
                });
                WordSource::Mapping(entries)
            }
            Value::Array(items) => {
                WordSource::Sequence(items.into_iter().map(RawItem::from).collect())
            }
            _ => WordSource::Empty,
        }
    }
}

impl From<Value> for RawItem {
    fn from(value: Value) -> Self {
        match value {
            Value::String(line) if !line.is_empty() => RawItem::Line(line),
            Value::Array(items) => {
                let mut items = items.into_iter();
                let russian = match items.next() {
                    Some(Value::String(s)) => Some(s),
                    _ => None,
                };
                RawItem::Tuple {
                    russian,
                    english: EnglishCandidate::List(strings_only(items)),
                }
            }
            Value::Object(mut map) => match map.remove("russian") {
                Some(Value::String(russian)) => RawItem::Record {
                    id: map.get("id").and_then(integral_id),
                    russian,
                    english: map
                        .remove("english")
                        .map(EnglishCandidate::from)
                        .unwrap_or(EnglishCandidate::Missing),
                },
                _ => RawItem::Skip,
            },
            _ => RawItem::Skip,
        }
    }
}

impl From<Value> for EnglishCandidate {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => EnglishCandidate::List(strings_only(items)),
            Value::String(text) => EnglishCandidate::Text(text),
            _ => EnglishCandidate::Missing,
        }
    }
}

fn strings_only(items: impl IntoIterator<Item = Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

/// Keys like `"0"` or `"42"` (canonical, below `u32::MAX`) are iterated
/// first, in ascending order; all other keys follow in document order.
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

/// Integer ids are kept; floats only when they have no fractional part.
fn integral_id(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

impl EnglishCandidate {
    fn answers(&self) -> Vec<String> {
        match self {
            EnglishCandidate::List(items) => items
                .iter()
                .map(|s| trim(s))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            EnglishCandidate::Text(text) => split_synonyms(text),
            EnglishCandidate::Missing => Vec::new(),
        }
    }
}

/// Split a comma-separated answer field.
fn split_synonyms(text: &str) -> Vec<String> {
    text.split(',')
        .map(trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip surrounding whitespace, counting U+FEFF as whitespace and U+0085
/// as content.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Produce a card only if both sides survive trimming.
fn build_card(id: i64, russian: &str, english: Vec<String>) -> Option<WordCard> {
    let russian = trim(russian);
    if russian.is_empty() || english.is_empty() {
        return None;
    }
    Some(WordCard {
        id,
        russian: russian.to_string(),
        english,
    })
}

/// Parse `"russian | english"` or `"russian - english"`.
///
/// `|` wins when present. With the dash form only the first `" - "`
/// separates; later ones stay inside the answer.
fn parse_line(id: i64, line: &str) -> Option<WordCard> {
    let (russian, english) = line.split_once('|').or_else(|| line.split_once(" - "))?;
    build_card(id, russian, split_synonyms(english))
}

impl RawItem {
    fn to_card(&self, position: i64) -> Option<WordCard> {
        match self {
            RawItem::Line(line) => parse_line(position, line),
            RawItem::Tuple { russian, english } => {
                build_card(position, russian.as_deref()?, english.answers())
            }
            RawItem::Record { id, russian, english } => {
                build_card(id.unwrap_or(position), russian, english.answers())
            }
            RawItem::Skip => None,
        }
    }
}

impl WordSource {
    /// Number of raw entries: mapping pairs or array elements.
    pub fn entry_count(&self) -> usize {
        match self {
            WordSource::Empty => 0,
            WordSource::Mapping(entries) => entries.len(),
            WordSource::Sequence(items) => items.len(),
        }
    }

    /// Build the valid cards in input order. Positions are 1-based and count
    /// every entry, including dropped ones.
    pub fn cards(&self) -> Vec<WordCard> {
        match self {
            WordSource::Empty => Vec::new(),
            WordSource::Mapping(entries) => entries
                .iter()
                .zip(1..)
                .filter_map(|((russian, english), position)| {
                    build_card(position, russian, english.answers())
                })
                .collect(),
            WordSource::Sequence(items) => items
                .iter()
                .zip(1..)
                .filter_map(|(item, position)| item.to_card(position))
                .collect(),
        }
    }
}

/// Normalize parsed JSON word data into cards.
///
/// Never fails: anything that cannot be read as a card is left out.
pub fn normalize_word_cards(data: Value) -> Vec<WordCard> {
    WordSource::from(data).cards()
}
