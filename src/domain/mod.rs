// Domain identifiers shared by the data layer and the UI
mod chain;
mod metric;

pub use chain::ChainId;
pub use metric::Metric;
