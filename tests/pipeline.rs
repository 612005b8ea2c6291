use std::fs;
use std::path::Path;

use chain_scope::config::{ChainSources, INTEREST_RATES_PATH};
use chain_scope::data::build_chain_table;
use chain_scope::models::DailySeries;
use chain_scope::ui::{Figure, SeriesVisibility};
use chain_scope::{ChainId, build_dataset};
use chrono::NaiveDate;
use strum::IntoEnumIterator;
use tempfile::tempdir;

const TVL: &str = "\
Protocol,31/12/2023,01/01/2024,02/01/2024,03/01/2024
Lido,1,2,3,4
Total,5,10,20,30
";

const PRICE: &str = "\
snapped_at,price,market_cap,total_volume
2023-12-31 00:00:00 UTC,0.9,90,9
2024-01-01 00:00:00 UTC,1.0,100,5
2024-01-02 00:00:00 UTC,2.0,0,10
";

const STABLES: &str = "Date,USDT,Total\n2024-01-01,4,4\n2024-01-03,6,6\n";

const STAKING: &str = r#"{"data":{"assets":[{"metrics":[
    {"metricKey":"reward_rate","defaultValue":7.1,"createdAt":"2024-01-01T00:00:00Z"},
    {"metricKey":"staked_tokens","defaultValue":1000,"createdAt":"2024-01-02T00:00:00Z"}
]}]}}"#;

const RATES: &str = "0,2024-01-01,5.33\n1,2024-01-03,5.30\n";

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn lay_out_data_root(root: &Path) {
    write(root, INTEREST_RATES_PATH, RATES);
    for chain in ChainId::iter() {
        let sources = ChainSources::for_chain(chain);
        write(root, sources.tvl, TVL);
        write(root, sources.price, PRICE);
        write(root, sources.stables, STABLES);
        write(root, sources.staking, STAKING);
    }
}

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn test_end_to_end_anchor_rows_and_nulls() {
    let dir = tempdir().unwrap();
    lay_out_data_root(dir.path());

    let dataset = build_dataset(dir.path()).unwrap();
    assert_eq!(dataset.len(), 8);

    let table = dataset.get(ChainId::Solana).unwrap();
    assert_eq!(table.len(), 3);

    let dates: Vec<NaiveDate> = table.rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![d(1), d(2), d(3)]);

    let tvl: Vec<Option<f64>> = table.rows.iter().map(|r| r.tvl).collect();
    assert_eq!(tvl, vec![Some(10.0), Some(20.0), Some(30.0)]);

    assert_eq!(table.rows[0].price, Some(1.0));
    assert_eq!(table.rows[2].price, None);

    // 5 / 100 * 100, then a zero market cap, then no price row at all
    assert_eq!(table.rows[0].liquidity, Some(5.0));
    assert_eq!(table.rows[1].liquidity, None);
    assert_eq!(table.rows[2].liquidity, None);

    assert_eq!(table.rows[0].stables_mcap, Some(4.0));
    assert_eq!(table.rows[1].stables_mcap, None);
    assert_eq!(table.rows[0].staking_rewards, Some(7.1));
    assert_eq!(table.rows[1].staked_amount, Some(1000.0));
    assert_eq!(table.rows[2].interest_rate, Some(5.30));
    assert_eq!(table.rows[1].interest_rate, None);
}

#[test]
fn test_build_is_deterministic() {
    let dir = tempdir().unwrap();
    lay_out_data_root(dir.path());

    let first = build_dataset(dir.path()).unwrap();
    let second = build_dataset(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_aborts_whole_build() {
    let dir = tempdir().unwrap();
    lay_out_data_root(dir.path());
    fs::remove_file(dir.path().join(ChainSources::for_chain(ChainId::Tezos).price)).unwrap();

    let err = build_dataset(dir.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("Tezos"));
}

#[test]
fn test_malformed_staking_document_aborts_build() {
    let dir = tempdir().unwrap();
    lay_out_data_root(dir.path());
    write(dir.path(), ChainSources::for_chain(ChainId::Aptos).staking, r#"{"data":{}}"#);

    assert!(build_dataset(dir.path()).is_err());
}

#[test]
fn test_duplicate_anchor_columns_are_removed_once_merged() {
    let dir = tempdir().unwrap();
    lay_out_data_root(dir.path());
    write(
        dir.path(),
        ChainSources::for_chain(ChainId::Sui).tvl,
        "Protocol,01/01/2024,01/01/2024,02/01/2024\nTotal,10,10,20\n",
    );

    let table = build_chain_table(dir.path(), ChainId::Sui, &DailySeries::new()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows[0].date, d(1));
    assert_eq!(table.rows[1].date, d(2));
}

#[test]
fn test_all_toggles_off_renders_no_traces() {
    let dir = tempdir().unwrap();
    lay_out_data_root(dir.path());

    let dataset = build_dataset(dir.path()).unwrap();
    let table = dataset.get(ChainId::Near).unwrap();

    assert!(Figure::build(table, &SeriesVisibility::NONE).traces.is_empty());
    assert_eq!(Figure::build(table, &SeriesVisibility::default()).traces.len(), 4);
}
