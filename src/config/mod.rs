//! Configuration module for the chain dashboard.

mod chains;
mod debug;
mod persistence;

pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

pub use chains::{ChainSources, INTEREST_RATES_PATH};
pub use debug::DF;
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
