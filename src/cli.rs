//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use cardwarden::config::{AppConfig, env_lookup};
use cardwarden::output::OutputMode;

/// cardwarden - Board card policy enforcement
#[derive(Parser, Debug)]
#[command(
    name = "cardwarden",
    version,
    about = "Board card policy enforcement",
    long_about = "Reconcile board cards against per-board rules.\n\n\
                  Cards that break their board's rules are tracked and the member\n\
                  whose change broke them is notified."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $CARDWARDEN_CONFIG, then ~/.cardwarden/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Receive board webhooks and reconcile cards
    Serve {
        /// Address to listen on (overrides [server] bind)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Evaluate one card against its board's rules without tracking it
    Check {
        /// Card ID
        card_id: String,

        /// Board ID the card belongs to
        #[arg(short, long)]
        board: String,

        /// Also apply the rules of this list, as if the card just moved there
        #[arg(short, long)]
        list: Option<String>,
    },

    /// List cards currently tracked as violating their rules
    Tracked,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Serve { bind }) => commands::serve(&load_config(cli.config)?, bind),
        Some(Command::Check {
            card_id,
            board,
            list,
        }) => commands::check(&load_config(cli.config)?, &card_id, &board, list, output_mode),
        Some(Command::Tracked) => commands::tracked(&load_config(cli.config)?, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("cardwarden v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cardwarden v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'cardwarden --help' for usage");
                println!("Run 'cardwarden serve' to start receiving webhooks");
            }
            Ok(())
        },
    }
}

/// Load the config file; a missing default file means built-in defaults
fn load_config(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    Ok(AppConfig::load_or_default(explicit, env_lookup)?)
}
