fn magnitude(x: f64) -> (f64, &'static str) {
    let abs = x.abs();
    if abs >= 1e9 {
        (1e9, "B")
    } else if abs >= 1e6 {
        (1e6, "M")
    } else if abs >= 1e3 {
        (1e3, "K")
    } else {
        (1.0, "")
    }
}

/// Compact label: 1.5B, 2.3M, 4.0K, or a plain integer below one thousand.
pub fn format_large_numbers(x: f64) -> String {
    match magnitude(x) {
        (unit, "") => format!("{:.0}", x / unit),
        (unit, suffix) => format!("{:.1}{}", x / unit, suffix),
    }
}

/// Axis tick label with enough decimals to tell ticks `step` apart (same K/M/B suffixes).
pub fn format_axis_value(x: f64, step: f64) -> String {
    let (unit, suffix) = magnitude(x);
    let scaled_step = step / unit;
    let decimals = if scaled_step.is_finite() && scaled_step > 0.0 {
        // Nudge exact powers of ten past float noise
        (-(scaled_step.log10() + 1e-9).floor()).clamp(0.0, 8.0) as usize
    } else {
        2
    };
    format!("{:.*}{}", decimals, x / unit, suffix)
}

/// Like `format_large_numbers` but keeps two decimals for small magnitudes (rates, prices).
pub fn format_value(x: f64) -> String {
    if x.abs() >= 1e3 {
        format_large_numbers(x)
    } else {
        format!("{:.2}", x)
    }
}
