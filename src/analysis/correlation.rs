use itertools::Itertools;
use statrs::statistics::Statistics;

use crate::domain::Metric;
use crate::models::ChainTable;

/// Fewer paired observations than this and no coefficient is reported.
pub const MIN_PAIRED_OBSERVATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub a: Metric,
    pub b: Metric,
    /// Pearson coefficient in [-1, 1].
    pub r: f64,
    /// Rows where both metrics are present.
    pub observations: usize,
}

/// Pearson correlation over the rows where both metrics are present.
/// `None` when there are too few pairs or either side is constant.
pub fn pearson(table: &ChainTable, a: Metric, b: Metric) -> Option<Correlation> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = table
        .rows
        .iter()
        .filter_map(|row| Some((row.value(a)?, row.value(b)?)))
        .unzip();

    if xs.len() < MIN_PAIRED_OBSERVATIONS {
        return None;
    }

    let sd_x = xs.iter().std_dev();
    let sd_y = ys.iter().std_dev();
    if sd_x == 0.0 || sd_y == 0.0 {
        return None;
    }

    let r = xs.iter().covariance(ys.iter()) / (sd_x * sd_y);
    r.is_finite().then_some(Correlation {
        a,
        b,
        r: r.clamp(-1.0, 1.0),
        observations: xs.len(),
    })
}

/// Every unordered pair of `metrics`, in the order given, skipping pairs with no coefficient.
pub fn correlation_matrix(table: &ChainTable, metrics: &[Metric]) -> Vec<Correlation> {
    metrics
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| pearson(table, *a, *b))
        .collect()
}
