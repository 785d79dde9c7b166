//! The `lexicard cards` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use lexicard_core::deck::load_deck;

pub fn execute(file: PathBuf, format: String) -> Result<()> {
    let deck = load_deck(&file)?;
    tracing::debug!(
        deck = %deck.name,
        cards = deck.cards.len(),
        dropped = deck.dropped(),
        "word list normalized"
    );

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&deck.cards)?);
        }
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["#", "Russian", "English"]);
            for card in &deck.cards {
                table.add_row(vec![
                    Cell::new(card.id),
                    Cell::new(&card.russian),
                    Cell::new(card.english.join(", ")),
                ]);
            }
            println!("{table}");
            println!("{} card(s)", deck.cards.len());
        }
        other => anyhow::bail!("unknown format: {other}"),
    }

    Ok(())
}
