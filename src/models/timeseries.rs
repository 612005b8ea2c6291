use std::collections::BTreeMap;

use chrono::NaiveDate;

/// One value per calendar day. Later inserts for the same day replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    values: BTreeMap<NaiveDate, f64>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, value: f64) {
        self.values.insert(date, value);
    }

    /// Value recorded for `date`, if any.
    #[inline]
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.values.get(&date).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.values.iter().map(|(d, v)| (*d, *v))
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.values.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.values.keys().next_back().copied()
    }
}

impl FromIterator<(NaiveDate, f64)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, f64)>>(iter: I) -> Self {
        let mut series = DailySeries::new();
        for (date, value) in iter {
            series.insert(date, value);
        }
        series
    }
}

/// A row of the locked-value anchor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TvlPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

/// Daily price snapshot. Column names follow the CoinGecko export.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PricePoint {
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
}

/// Price snapshots keyed by calendar day.
pub type PriceSeries = BTreeMap<NaiveDate, PricePoint>;
