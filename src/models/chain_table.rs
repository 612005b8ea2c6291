use chrono::NaiveDate;

use crate::domain::{ChainId, Metric};

/// One date of the wide per-chain table. `None` means the metric is absent for that date.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainRow {
    pub date: NaiveDate,
    pub tvl: Option<f64>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub stables_mcap: Option<f64>,
    pub staking_rewards: Option<f64>,
    pub staked_amount: Option<f64>,
    pub liquidity: Option<f64>,
    pub interest_rate: Option<f64>,
}

impl ChainRow {
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Tvl => self.tvl,
            Metric::Price => self.price,
            Metric::MarketCap => self.market_cap,
            Metric::TotalVolume => self.total_volume,
            Metric::StablesMCap => self.stables_mcap,
            Metric::StakingRewards => self.staking_rewards,
            Metric::StakedAmount => self.staked_amount,
            Metric::Liquidity => self.liquidity,
            Metric::InterestRate => self.interest_rate,
        }
    }
}

/// The wide table for one chain, in anchor (locked-value file) order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainTable {
    pub chain: ChainId,
    pub rows: Vec<ChainRow>,
}

impl ChainTable {
    pub fn new(chain: ChainId, rows: Vec<ChainRow>) -> Self {
        Self { chain, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(date, value)` pairs for rows where `metric` is present.
    pub fn points(&self, metric: Metric) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.value(metric).map(|v| (row.date, v)))
    }

    /// Number of rows where `metric` is present.
    pub fn coverage(&self, metric: Metric) -> usize {
        self.points(metric).count()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.iter().map(|r| r.date).min()?;
        let last = self.rows.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Drops rows that exactly repeat an earlier row (nulls compare equal). Order of the survivors is kept.
    pub fn drop_duplicate_rows(&mut self) -> usize {
        let before = self.rows.len();
        let mut kept: Vec<ChainRow> = Vec::with_capacity(before);
        for row in self.rows.drain(..) {
            if !kept.contains(&row) {
                kept.push(row);
            }
        }
        self.rows = kept;
        before - self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(day: u32, tvl: Option<f64>) -> ChainRow {
        ChainRow {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            tvl,
            ..Default::default()
        }
    }

    #[test]
    fn test_drop_duplicate_rows_keeps_first_and_order() {
        let mut table = ChainTable::new(
            ChainId::Sui,
            vec![row(2, Some(1.0)), row(1, None), row(2, Some(1.0)), row(2, Some(2.0)), row(1, None)],
        );

        let removed = table.drop_duplicate_rows();

        assert_eq!(removed, 2);
        assert_eq!(table.rows, vec![row(2, Some(1.0)), row(1, None), row(2, Some(2.0))]);
    }

    #[test]
    fn test_points_skip_nulls() {
        let table = ChainTable::new(ChainId::Sui, vec![row(1, Some(1.0)), row(2, None), row(3, Some(3.0))]);
        assert_eq!(table.coverage(Metric::Tvl), 2);
        assert_eq!(table.coverage(Metric::Price), 0);
        let (first, last) = table.date_range().unwrap();
        assert_eq!(first.to_string(), "2024-01-01");
        assert_eq!(last.to_string(), "2024-01-03");
    }
}
