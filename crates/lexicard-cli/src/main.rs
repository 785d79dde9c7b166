//! lexicard CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lexicard", version, about = "Vocabulary flashcards and drills")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a word list and print its cards
    Cards {
        /// Path to a .json word list
        #[arg(long)]
        file: PathBuf,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Check word lists and report dropped entries
    Validate {
        /// Path to a word list or a directory of them
        #[arg(long)]
        words: PathBuf,
    },

    /// List page routes
    Routes,

    /// Replay a sequence of page visits and show each transition
    Navigate {
        /// Paths to visit, in order (e.g. / /cards /)
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Look up a page translation
    Translate {
        /// Page name: main, cards, memorization, selection, spelling
        #[arg(long)]
        page: String,

        /// Dotted translation key (e.g. "buttons.next")
        #[arg(long)]
        key: String,

        /// Language: ru, en (defaults to the configured language)
        #[arg(long)]
        lang: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config, word list, and page translations
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lexicard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cards { file, format } => commands::cards::execute(file, format),
        Commands::Validate { words } => commands::validate::execute(words),
        Commands::Routes => commands::routes::execute(),
        Commands::Navigate { paths } => commands::navigate::execute(paths),
        Commands::Translate {
            page,
            key,
            lang,
            config,
        } => commands::translate::execute(page, key, lang, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
