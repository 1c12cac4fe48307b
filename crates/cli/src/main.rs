//! Garderobe CLI - Inspect live session configuration and replay sessions.
//!
//! # Usage
//!
//! ```bash
//! # Print the setup message submitted to the live session
//! garderobe config --locale en
//!
//! # Print the function declarations offered to the model
//! garderobe declarations
//!
//! # List the allowed values of a property
//! garderobe catalog color --locale sv
//!
//! # Replay recorded server messages through a mounted component
//! garderobe replay session.jsonl --out-dir charts/
//! ```
//!
//! # Commands
//!
//! - `config` - Print the session setup message
//! - `declarations` - Print the function declarations
//! - `catalog` - List catalog entries for a property
//! - `replay` - Replay newline-delimited server messages
//!
//! Settings are read from `LIVE_*` environment variables (see
//! `garderobe_live::config`). Logs go to stderr; set `LOG_FORMAT=json` for
//! structured output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use garderobe_core::{ClassificationProperty, Locale};
use garderobe_live::LiveSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "garderobe")]
#[command(author, version, about = "Garderobe live classification tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the session setup message as JSON
    Config {
        /// System instruction locale (`sv`, `en`); overrides `LIVE_LOCALE`
        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Print the function declarations as JSON
    Declarations,
    /// List the catalog entries of a property
    Catalog {
        /// Property name (category, color, condition, material, pattern)
        property: ClassificationProperty,

        /// Label locale (`sv`, `en`)
        #[arg(short, long, default_value = "sv")]
        locale: Locale,
    },
    /// Replay newline-delimited server messages through a mounted component
    Replay {
        /// File with one server message per line
        file: PathBuf,

        /// Directory to write the rendered chart page to
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing to stderr, as JSON when `LOG_FORMAT=json`.
fn init_tracing() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "garderobe_live=info,garderobe_cli=info".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = LiveSettings::from_env()?;

    match cli.command {
        Commands::Config { locale } => {
            if let Some(locale) = locale {
                settings.locale = locale;
            }
            commands::inspect::config(&settings)?;
        }
        Commands::Declarations => commands::inspect::declarations(&settings)?,
        Commands::Catalog { property, locale } => commands::inspect::catalog(property, locale)?,
        Commands::Replay { file, out_dir } => {
            commands::replay::replay(&settings, &file, out_dir.as_deref()).await?;
        }
    }
    Ok(())
}
