//! rDowntime library root.
//! Exposes the CLI parser, the high-level run() function and the gap engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Batch { .. } => cli::commands::batch::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // init must work even when an old config file no longer parses
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
