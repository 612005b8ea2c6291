mod chain_table;
mod dataset;
mod timeseries;

pub use chain_table::{ChainRow, ChainTable};
pub use dataset::Dataset;
pub use timeseries::{DailySeries, PricePoint, PriceSeries, TvlPoint};
