//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Width of every series line
    pub line_width: f32,
    /// Fraction of each series' own range added above and below it after normalization
    pub plot_y_padding_pct: f64,
    /// Target number of date labels along the x axis
    pub x_axis_label_count: f64,
    /// Minimum pixel width reserved for each stacked y axis
    pub y_axis_min_thickness: f32,

    // --- SERIES COLORS (CSS mediumblue/darkturquoise/indigo/purple, lifted to read on the dark plot) ---
    pub color_blue: Color32,
    pub color_turquoise: Color32,
    pub color_indigo: Color32,
    pub color_purple: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,

    // Correlation panel
    pub color_correlation_positive: Color32,
    pub color_correlation_negative: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_width: 2.0,
    plot_y_padding_pct: 0.02,
    x_axis_label_count: 8.0,
    y_axis_min_thickness: 48.0,

    color_blue: Color32::from_rgb(90, 120, 255),
    color_turquoise: Color32::from_rgb(0, 206, 209),
    color_indigo: Color32::from_rgb(150, 100, 240),
    color_purple: Color32::from_rgb(200, 90, 200),

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    color_correlation_positive: Color32::from_rgb(100, 255, 100),
    color_correlation_negative: Color32::from_rgb(255, 80, 80),
};
