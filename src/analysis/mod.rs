mod correlation;

pub use correlation::{Correlation, MIN_PAIRED_OBSERVATIONS, correlation_matrix, pearson};
