/// Format a statistic with the two decimals used throughout the display
pub fn format_stat(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format an axis tick, keeping labels short for narrow panels
pub fn format_axis(value: f64) -> String {
    let abs_value = value.abs();
    if abs_value >= 100.0 {
        format!("{:.0}", value)
    } else if abs_value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}
