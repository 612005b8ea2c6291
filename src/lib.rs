#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the summary binary)
pub use app::App;
pub use config::PERSISTENCE;
pub use data::build_dataset;
pub use domain::{ChainId, Metric};
pub use models::{ChainRow, ChainTable, Dataset};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding data/, price/, stablecoins/, staking/ and inlfation/
    #[arg(long, default_value = ".")]
    pub data_root: PathBuf,

    /// Chain selected at startup (e.g. Solana, near)
    #[arg(long)]
    pub chain: Option<ChainId>,
}

/// Main application entry point - creates the GUI app around an already built dataset
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, dataset: Dataset) -> App {
    App::new(cc, args, dataset)
}
