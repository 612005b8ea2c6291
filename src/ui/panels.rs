use eframe::egui::{ComboBox, Ui};
use strum::IntoEnumIterator;

use crate::analysis::{Correlation, correlation_matrix};
use crate::config::PLOT_CONFIG;
use crate::domain::{ChainId, Metric};
use crate::models::ChainTable;
use crate::ui::chart::{CHART_SERIES, SeriesToggle, SeriesVisibility};
use crate::ui::styles::{UiStyleExt, get_correlation_color};
use crate::ui::UI_TEXT;
use crate::utils::TimeUtils;

/// Metrics listed in the correlation panel, besides the charted ones.
const EXTRA_CORRELATION_METRICS: [Metric; 3] =
    [Metric::StablesMCap, Metric::Liquidity, Metric::InterestRate];

fn toggle_label(toggle: SeriesToggle) -> &'static str {
    match toggle {
        SeriesToggle::StakingRewards => &UI_TEXT.cb_staking_rewards,
        SeriesToggle::Tvl => &UI_TEXT.cb_tvl,
        SeriesToggle::Price => &UI_TEXT.cb_price,
        SeriesToggle::StakedAmount => &UI_TEXT.cb_staked_amount,
    }
}

/// Chain dropdown. Returns true when the selection changed.
pub(crate) fn render_chain_selector(ui: &mut Ui, selected: &mut ChainId, available: &[ChainId]) -> bool {
    let before = *selected;
    ui.label(&UI_TEXT.label_chain_select);
    ComboBox::from_id_salt("chain_select")
        .selected_text(selected.to_string())
        .show_ui(ui, |ui| {
            for chain in ChainId::iter().filter(|c| available.contains(c)) {
                ui.selectable_value(selected, chain, chain.to_string());
            }
        });
    before != *selected
}

/// One checkbox per row of the series table. Returns true when any toggle changed.
pub(crate) fn render_series_toggles(ui: &mut Ui, visibility: &mut SeriesVisibility) -> bool {
    let mut changed = false;
    for spec in CHART_SERIES.iter() {
        changed |= ui
            .checkbox(visibility.flag_mut(spec.toggle), toggle_label(spec.toggle))
            .changed();
    }
    changed
}

pub(crate) fn render_table_summary(ui: &mut Ui, table: &ChainTable) {
    ui.label_subheader(table.chain.to_string());
    ui.metric(&UI_TEXT.sp_rows, &table.len().to_string(), PLOT_CONFIG.color_text_neutral);
    if let Some((first, last)) = table.date_range() {
        let range = format!("{} .. {}", TimeUtils::format_date(first), TimeUtils::format_date(last));
        ui.metric(&UI_TEXT.sp_date_range, &range, PLOT_CONFIG.color_text_neutral);
    }
}

/// Pairwise correlations of the selected chain, recomputed only when the chain changes.
#[derive(Default)]
pub(crate) struct CorrelationCache {
    chain: Option<ChainId>,
    correlations: Vec<Correlation>,
}

impl CorrelationCache {
    pub(crate) fn get(&mut self, table: &ChainTable) -> &[Correlation] {
        if self.chain != Some(table.chain) {
            let metrics: Vec<Metric> = CHART_SERIES
                .iter()
                .map(|s| s.metric)
                .chain(EXTRA_CORRELATION_METRICS)
                .collect();
            self.correlations = correlation_matrix(table, &metrics);
            self.chain = Some(table.chain);
        }
        &self.correlations
    }
}

pub(crate) fn render_correlations(ui: &mut Ui, correlations: &[Correlation]) {
    ui.label_subheader(&UI_TEXT.sp_correlations_heading);

    if correlations.is_empty() {
        ui.label_subdued(&UI_TEXT.sp_correlations_empty);
        return;
    }

    for c in correlations {
        ui.metric(
            &format!("{} / {}", c.a, c.b),
            &format!("{:+.2} (n={})", c.r, c.observations),
            get_correlation_color(c.r),
        );
    }
}
