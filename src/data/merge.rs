//! Left-joins every per-chain series onto the locked-value anchor.
//!
//! The anchor decides the row set: values on dates the anchor does not have are
//! dropped, and anchor dates missing elsewhere become nulls.

use crate::config::DF;
use crate::config::constants::LIQUIDITY_SCALE;
use crate::domain::{ChainId, Metric};
use crate::models::{ChainRow, ChainTable, DailySeries, PriceSeries, TvlPoint};

/// Everything joined onto the anchor for one chain.
#[derive(Debug, Clone, Default)]
pub struct ChainInputs {
    pub tvl: Vec<TvlPoint>,
    pub price: PriceSeries,
    pub stables: DailySeries,
    pub staking_rewards: DailySeries,
    pub staked_amount: DailySeries,
}

/// Trading volume over market cap, as a percentage. Null when either side is null or the cap is zero.
pub fn liquidity(total_volume: Option<f64>, market_cap: Option<f64>) -> Option<f64> {
    match (total_volume, market_cap) {
        (Some(volume), Some(cap)) if cap != 0.0 => {
            let pct = volume / cap * LIQUIDITY_SCALE;
            pct.is_finite().then_some(pct)
        }
        _ => None,
    }
}

/// One output row per anchor row, in anchor order.
pub fn merge_chain(chain: ChainId, inputs: &ChainInputs) -> ChainTable {
    let rows: Vec<ChainRow> = inputs
        .tvl
        .iter()
        .map(|anchor| {
            let price = inputs.price.get(&anchor.date).copied().unwrap_or_default();
            ChainRow {
                date: anchor.date,
                tvl: anchor.value,
                price: price.price,
                market_cap: price.market_cap,
                total_volume: price.total_volume,
                stables_mcap: inputs.stables.get(anchor.date),
                staking_rewards: inputs.staking_rewards.get(anchor.date),
                staked_amount: inputs.staked_amount.get(anchor.date),
                liquidity: liquidity(price.total_volume, price.market_cap),
                interest_rate: None,
            }
        })
        .collect();

    let table = ChainTable::new(chain, rows);

    if DF.log_merge {
        log::info!(
            "{}: {} rows, price {} / stables {} / rewards {} / staked {}",
            chain,
            table.len(),
            table.coverage(Metric::Price),
            table.coverage(Metric::StablesMCap),
            table.coverage(Metric::StakingRewards),
            table.coverage(Metric::StakedAmount),
        );
    }

    table
}

/// Left-joins the shared interest-rate series onto an already merged table.
pub fn attach_interest_rates(table: &mut ChainTable, rates: &DailySeries) {
    for row in table.rows.iter_mut() {
        row.interest_rate = rates.get(row.date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PricePoint;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn anchor(values: &[(u32, f64)]) -> Vec<TvlPoint> {
        values
            .iter()
            .map(|(day, v)| TvlPoint { date: d(*day), value: Some(*v) })
            .collect()
    }

    fn price(price: f64, cap: Option<f64>, volume: Option<f64>) -> PricePoint {
        PricePoint { price: Some(price), market_cap: cap, total_volume: volume }
    }

    #[test]
    fn test_row_count_follows_anchor_and_missing_price_is_null() {
        let mut inputs = ChainInputs {
            tvl: anchor(&[(1, 10.0), (2, 20.0), (3, 30.0)]),
            ..Default::default()
        };
        inputs.price.insert(d(1), price(1.0, Some(100.0), Some(5.0)));
        inputs.price.insert(d(2), price(2.0, Some(200.0), Some(10.0)));

        let table = merge_chain(ChainId::Aptos, &inputs);

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0].tvl, Some(10.0));
        assert_eq!(table.rows[1].price, Some(2.0));
        assert_eq!(table.rows[2].price, None);
        assert_eq!(table.rows[2].tvl, Some(30.0));
        assert_eq!(table.rows[0].liquidity, Some(5.0));
    }

    #[test]
    fn test_dates_outside_anchor_are_dropped() {
        let mut inputs = ChainInputs {
            tvl: anchor(&[(2, 20.0)]),
            ..Default::default()
        };
        inputs.stables.insert(d(1), 1.0);
        inputs.stables.insert(d(2), 2.0);
        inputs.staking_rewards.insert(d(3), 7.0);

        let table = merge_chain(ChainId::Aptos, &inputs);

        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].stables_mcap, Some(2.0));
        assert_eq!(table.rows[0].staking_rewards, None);
    }

    #[test]
    fn test_liquidity_is_null_without_usable_market_cap() {
        assert_eq!(liquidity(Some(5.0), Some(0.0)), None);
        assert_eq!(liquidity(Some(5.0), None), None);
        assert_eq!(liquidity(None, Some(10.0)), None);
        assert_eq!(liquidity(Some(5.0), Some(50.0)), Some(10.0));
    }

    #[test]
    fn test_liquidity_null_for_every_row_with_zero_or_null_cap() {
        let mut inputs = ChainInputs {
            tvl: anchor(&[(1, 1.0), (2, 2.0), (3, 3.0)]),
            ..Default::default()
        };
        inputs.price.insert(d(1), price(1.0, Some(0.0), Some(5.0)));
        inputs.price.insert(d(2), price(1.0, None, Some(5.0)));

        let table = merge_chain(ChainId::Aptos, &inputs);

        assert!(table.rows.iter().all(|r| r.liquidity.is_none()));
    }

    #[test]
    fn test_empty_anchor_gives_empty_table() {
        let mut inputs = ChainInputs::default();
        inputs.stables.insert(d(1), 1.0);
        assert!(merge_chain(ChainId::Aptos, &inputs).is_empty());
    }

    #[test]
    fn test_attach_interest_rates() {
        let inputs = ChainInputs {
            tvl: anchor(&[(1, 1.0), (2, 2.0)]),
            ..Default::default()
        };
        let mut table = merge_chain(ChainId::Aptos, &inputs);
        let rates: DailySeries = vec![(d(2), 5.25), (d(9), 5.0)].into_iter().collect();

        attach_interest_rates(&mut table, &rates);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].interest_rate, None);
        assert_eq!(table.rows[1].interest_rate, Some(5.25));
    }
}
