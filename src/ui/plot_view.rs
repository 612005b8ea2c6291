use eframe::egui::{RichText, Ui};
use egui_plot::{Axis, AxisHints, Corner, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};
use itertools::{Itertools, MinMaxResult};

use crate::config::PLOT_CONFIG;
use crate::domain::ChainId;
use crate::models::ChainTable;
use crate::ui::chart::{AxisSide, Figure, SeriesVisibility, Trace};
use crate::utils::{TimeUtils, format_axis_value, format_value};

/// Maps one trace's real values into the shared [0, 1] plot space and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesScale {
    pub min: f64,
    pub max: f64,
}

impl SeriesScale {
    /// `None` for a trace without values.
    pub fn for_trace(trace: &Trace) -> Option<Self> {
        match trace.values().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(Self::padded(v, v)),
            MinMaxResult::MinMax(min, max) => Some(Self::padded(min, max)),
        }
    }

    fn padded(min: f64, max: f64) -> Self {
        // A flat series gets a unit range centred on its value
        let span = if max > min { max - min } else { 1.0 };
        let centre_shift = if max > min { 0.0 } else { 0.5 };
        let pad = span * PLOT_CONFIG.plot_y_padding_pct;
        Self {
            min: min - centre_shift - pad,
            max: min - centre_shift + span + pad,
        }
    }

    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    #[inline]
    pub fn denormalize(&self, unit: f64) -> f64 {
        self.min + unit * (self.max - self.min)
    }

    /// Real-valued label for a grid mark given in normalized units.
    pub fn tick_label(&self, unit: f64, unit_step: f64) -> String {
        format_axis_value(self.denormalize(unit), unit_step * (self.max - self.min))
    }
}

struct PlotCache {
    key: (ChainId, SeriesVisibility),
    figure: Figure,
    scales: Vec<Option<SeriesScale>>,
}

/// Renders a `Figure`, rebuilding it only when the chain or toggles change.
#[derive(Default)]
pub struct PlotView {
    cache: Option<PlotCache>,
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...) in whole days
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one day
    (nice_step * mag).max(1.0)
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label("Date")
        .formatter(|mark, _range| {
            TimeUtils::plot_x_to_date(mark.value)
                .map(TimeUtils::format_date)
                .unwrap_or_default()
        })
        .placement(VPlacement::Bottom)
}

fn create_y_axis(trace: &Trace, scale: Option<SeriesScale>) -> AxisHints<'static> {
    let placement = match trace.axis.side {
        AxisSide::Left => HPlacement::Left,
        AxisSide::Right => HPlacement::Right,
    };
    AxisHints::new_y()
        .label(RichText::new(trace.axis.title).color(trace.axis.color))
        .formatter(move |mark, _range| match scale {
            Some(scale) => scale.tick_label(mark.value, mark.step_size),
            None => String::new(),
        })
        .placement(placement)
        .min_thickness(PLOT_CONFIG.y_axis_min_thickness)
}

/// Axes nearest the plot come first within each side.
fn ordered_axes(figure: &Figure, scales: &[Option<SeriesScale>]) -> Vec<AxisHints<'static>> {
    figure
        .traces
        .iter()
        .zip(scales.iter().copied())
        .sorted_by_key(|(trace, _)| (trace.axis.side == AxisSide::Right, trace.axis.slot))
        .map(|(trace, scale)| create_y_axis(trace, scale))
        .collect()
}

impl PlotView {
    pub fn new() -> Self {
        Self { cache: None }
    }

    fn prepare(&mut self, table: &ChainTable, visibility: &SeriesVisibility) -> &PlotCache {
        let key = (table.chain, *visibility);
        let cache = match self.cache.take() {
            Some(cache) if cache.key == key => cache,
            _ => {
                let figure = Figure::build(table, visibility);
                let scales = figure.traces.iter().map(SeriesScale::for_trace).collect();
                PlotCache { key, figure, scales }
            }
        };
        self.cache.insert(cache)
    }

    pub fn show_chart(&mut self, ui: &mut Ui, table: &ChainTable, visibility: &SeriesVisibility) {
        let PlotCache { figure, scales, .. } = self.prepare(table, visibility);

        ui.heading(&figure.title);

        let hover_scales: Vec<(&'static str, Option<SeriesScale>)> = figure
            .traces
            .iter()
            .map(|t| t.name)
            .zip(scales.iter().copied())
            .collect();

        Plot::new("chain_plot")
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(ordered_axes(&figure, &scales))
            .x_grid_spacer(|input| {
                let (min, max) = input.bounds;
                let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_axis_label_count);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark { value: i as f64 * step, step_size: step })
                    .collect()
            })
            .label_formatter(move |name, point| {
                let date = TimeUtils::plot_x_to_date(point.x)
                    .map(TimeUtils::format_date)
                    .unwrap_or_default();
                match hover_scales.iter().find(|(n, _)| *n == name) {
                    Some((_, Some(scale))) => {
                        format!("{}\n{}: {}", date, name, format_value(scale.denormalize(point.y)))
                    }
                    _ => date,
                }
            })
            .include_y(0.0)
            .include_y(1.0)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (trace, scale) in figure.traces.iter().zip(scales.iter()) {
                    let Some(scale) = scale else { continue };
                    for segment in &trace.segments {
                        let points: Vec<[f64; 2]> = segment
                            .iter()
                            .map(|[x, y]| [*x, scale.normalize(*y)])
                            .collect();
                        plot_ui.line(
                            Line::new(trace.name, PlotPoints::new(points))
                                .color(trace.color)
                                .width(PLOT_CONFIG.line_width),
                        );
                    }
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;
    use crate::ui::chart::AxisSpec;
    use eframe::egui::Color32;

    fn trace(values: &[f64]) -> Trace {
        Trace {
            name: "TVL",
            metric: Metric::Tvl,
            color: Color32::WHITE,
            axis: AxisSpec { title: "TVL", color: Color32::WHITE, side: AxisSide::Left, slot: 0 },
            segments: vec![values.iter().enumerate().map(|(i, v)| [i as f64, *v]).collect()],
        }
    }

    #[test]
    fn test_scale_roundtrip_and_padding() {
        let scale = SeriesScale::for_trace(&trace(&[100.0, 300.0, 200.0])).unwrap();
        assert!(scale.normalize(100.0) > 0.0);
        assert!(scale.normalize(300.0) < 1.0);
        assert!((scale.denormalize(scale.normalize(250.0)) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_labels_for_sub_dollar_price_are_distinct() {
        let scale = SeriesScale { min: 0.15, max: 0.35 };
        let ticks: Vec<String> = (0..5).map(|i| scale.tick_label(i as f64 * 0.25, 0.25)).collect();
        assert_eq!(ticks, vec!["0.15", "0.20", "0.25", "0.30", "0.35"]);
    }

    #[test]
    fn test_prepare_reuses_cache_until_key_changes() {
        let table = ChainTable::new(ChainId::Algorand, Vec::new());
        let mut view = PlotView::new();

        let first: *const PlotCache = view.prepare(&table, &SeriesVisibility::default());
        let second: *const PlotCache = view.prepare(&table, &SeriesVisibility::default());
        assert_eq!(first, second);

        let rebuilt = view.prepare(&table, &SeriesVisibility::NONE);
        assert_eq!(rebuilt.key, (ChainId::Algorand, SeriesVisibility::NONE));
        assert!(rebuilt.figure.traces.is_empty());
    }

    #[test]
    fn test_flat_and_empty_traces() {
        let flat = SeriesScale::for_trace(&trace(&[5.0, 5.0])).unwrap();
        assert!((flat.normalize(5.0) - 0.5).abs() < 1e-9);

        let mut empty = trace(&[]);
        empty.segments.clear();
        assert_eq!(SeriesScale::for_trace(&empty), None);
    }

    #[test]
    fn test_adaptive_step_is_whole_days() {
        assert_eq!(calculate_adaptive_step(365.0, 8.0), 50.0);
        assert_eq!(calculate_adaptive_step(3.0, 8.0), 1.0);
        assert_eq!(calculate_adaptive_step(0.0, 8.0), 1.0);
    }
}
