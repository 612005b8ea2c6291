//! GUI-free description of the chart: which traces exist and which axis each one owns.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::PLOT_CONFIG;
use crate::domain::{ChainId, Metric};
use crate::models::ChainTable;
use crate::utils::TimeUtils;

/// The four user toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesVisibility {
    pub staking_rewards: bool,
    pub tvl: bool,
    pub price: bool,
    pub staked_amount: bool,
}

impl Default for SeriesVisibility {
    fn default() -> Self {
        Self {
            staking_rewards: true,
            tvl: true,
            price: true,
            staked_amount: true,
        }
    }
}

impl SeriesVisibility {
    pub const NONE: SeriesVisibility = SeriesVisibility {
        staking_rewards: false,
        tvl: false,
        price: false,
        staked_amount: false,
    };

    pub fn is_enabled(&self, toggle: SeriesToggle) -> bool {
        match toggle {
            SeriesToggle::StakingRewards => self.staking_rewards,
            SeriesToggle::Tvl => self.tvl,
            SeriesToggle::Price => self.price,
            SeriesToggle::StakedAmount => self.staked_amount,
        }
    }

    pub fn flag_mut(&mut self, toggle: SeriesToggle) -> &mut bool {
        match toggle {
            SeriesToggle::StakingRewards => &mut self.staking_rewards,
            SeriesToggle::Tvl => &mut self.tvl,
            SeriesToggle::Price => &mut self.price,
            SeriesToggle::StakedAmount => &mut self.staked_amount,
        }
    }

    pub fn toggle(&mut self, toggle: SeriesToggle) {
        let flag = self.flag_mut(toggle);
        *flag = !*flag;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesToggle {
    StakingRewards,
    Tvl,
    Price,
    StakedAmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSide {
    Left,
    Right,
}

/// One row of the series table.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    pub toggle: SeriesToggle,
    pub metric: Metric,
    pub label: &'static str,
    pub color: Color32,
    pub side: AxisSide,
}

/// Trace order, colors and axis sides.
pub const CHART_SERIES: [SeriesSpec; 4] = [
    SeriesSpec {
        toggle: SeriesToggle::StakingRewards,
        metric: Metric::StakingRewards,
        label: "StakingRewards",
        color: PLOT_CONFIG.color_blue,
        side: AxisSide::Left,
    },
    SeriesSpec {
        toggle: SeriesToggle::Tvl,
        metric: Metric::Tvl,
        label: "TVL",
        color: PLOT_CONFIG.color_turquoise,
        side: AxisSide::Left,
    },
    SeriesSpec {
        toggle: SeriesToggle::Price,
        metric: Metric::Price,
        label: "Price",
        color: PLOT_CONFIG.color_indigo,
        side: AxisSide::Right,
    },
    SeriesSpec {
        toggle: SeriesToggle::StakedAmount,
        metric: Metric::StakedAmount,
        label: "StakedAmount",
        color: PLOT_CONFIG.color_purple,
        side: AxisSide::Right,
    },
];

/// A y axis owned by exactly one trace. `slot` 0 sits next to the plot, higher slots further out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub title: &'static str,
    pub color: Color32,
    pub side: AxisSide,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: &'static str,
    pub metric: Metric,
    pub color: Color32,
    pub axis: AxisSpec,
    /// `[x, y]` runs split wherever the table has a null, so gaps stay visible.
    pub segments: Vec<Vec<[f64; 2]>>,
}

impl Trace {
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments.iter().flatten().map(|p| p[1])
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub traces: Vec<Trace>,
}

impl Figure {
    /// Walks `CHART_SERIES` once, emitting a trace and an axis for each enabled series.
    pub fn build(table: &ChainTable, visibility: &SeriesVisibility) -> Self {
        let mut left_slots = 0;
        let mut right_slots = 0;

        let traces = CHART_SERIES
            .iter()
            .filter(|spec| visibility.is_enabled(spec.toggle))
            .map(|spec| {
                let slots = match spec.side {
                    AxisSide::Left => &mut left_slots,
                    AxisSide::Right => &mut right_slots,
                };
                let slot = *slots;
                *slots += 1;

                Trace {
                    name: spec.label,
                    metric: spec.metric,
                    color: spec.color,
                    axis: AxisSpec {
                        title: spec.label,
                        color: spec.color,
                        side: spec.side,
                        slot,
                    },
                    segments: segments(table, spec.metric),
                }
            })
            .collect();

        Self {
            title: title_for(table.chain),
            traces,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

pub fn title_for(chain: ChainId) -> String {
    format!("{} Data with Multiple Y-Axes", chain)
}

fn segments(table: &ChainTable, metric: Metric) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for row in &table.rows {
        match row.value(metric) {
            Some(v) => current.push([TimeUtils::date_to_plot_x(row.date), v]),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
