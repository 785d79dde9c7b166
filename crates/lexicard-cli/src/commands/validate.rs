//! The `lexicard validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(words_path: PathBuf) -> Result<()> {
    let decks = if words_path.is_dir() {
        lexicard_core::deck::load_deck_directory(&words_path)?
    } else {
        vec![lexicard_core::deck::load_deck(&words_path)?]
    };

    let mut total_dropped = 0;

    for deck in &decks {
        println!(
            "Deck: {} ({} entries, {} cards)",
            deck.name,
            deck.entry_count,
            deck.cards.len()
        );

        let dropped = deck.dropped();
        if dropped > 0 {
            println!("  WARNING: {dropped} entries could not be read as cards");
        }
        total_dropped += dropped;
    }

    if total_dropped == 0 {
        println!("All word lists valid.");
    } else {
        println!("\n{total_dropped} entries dropped.");
    }

    Ok(())
}
