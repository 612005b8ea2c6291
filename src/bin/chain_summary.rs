use anyhow::Result;
use chain_scope::analysis::pearson;
use chain_scope::utils::TimeUtils;
use chain_scope::{ChainTable, Cli, Metric, build_dataset};
use clap::Parser;
use strum::IntoEnumIterator;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "From")]
    first: String,
    #[tabled(rename = "To")]
    last: String,
    #[tabled(rename = "Coverage %")]
    coverage: String,
    #[tabled(rename = "r(TVL, price)")]
    tvl_price: String,
    #[tabled(rename = "r(StakingRewards, InterestRate)")]
    rewards_rates: String,
}

fn coverage_summary(table: &ChainTable) -> String {
    if table.is_empty() {
        return "-".to_string();
    }
    Metric::iter()
        .filter(|m| *m != Metric::Tvl)
        .map(|m| format!("{} {:.0}", m, 100.0 * table.coverage(m) as f64 / table.len() as f64))
        .collect::<Vec<_>>()
        .join(", ")
}

fn correlation_cell(table: &ChainTable, a: Metric, b: Metric) -> String {
    pearson(table, a, b)
        .map(|c| format!("{:+.2} (n={})", c.r, c.observations))
        .unwrap_or_else(|| "-".to_string())
}

fn summarize(table: &ChainTable) -> SummaryRow {
    let (first, last) = table
        .date_range()
        .map(|(f, l)| (TimeUtils::format_date(f), TimeUtils::format_date(l)))
        .unwrap_or_default();

    SummaryRow {
        chain: table.chain.to_string(),
        rows: table.len(),
        first,
        last,
        coverage: coverage_summary(table),
        tvl_price: correlation_cell(table, Metric::Tvl, Metric::Price),
        rewards_rates: correlation_cell(table, Metric::StakingRewards, Metric::InterestRate),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    log::info!("Building dataset from {:?}", args.data_root);

    let dataset = build_dataset(&args.data_root)?;

    let rows: Vec<SummaryRow> = dataset
        .tables()
        .filter(|t| args.chain.is_none_or(|c| c == t.chain))
        .map(summarize)
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    Ok(())
}
