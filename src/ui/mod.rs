mod chart;
mod panels;
mod plot_view;
mod styles;
mod ui_config;
mod ui_text;

pub use chart::{
    AxisSide, AxisSpec, CHART_SERIES, Figure, SeriesSpec, SeriesToggle, SeriesVisibility, Trace,
    title_for,
};
pub use plot_view::{PlotView, SeriesScale};

pub(crate) use panels::{
    CorrelationCache, render_chain_selector, render_correlations, render_series_toggles,
    render_table_summary,
};
pub(crate) use ui_config::{UI_CONFIG, setup_custom_visuals};
pub(crate) use ui_text::UI_TEXT;
