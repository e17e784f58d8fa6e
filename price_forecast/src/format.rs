//! Human-readable formatting for the tabular display layer

/// Format a dollar amount with a magnitude suffix, e.g. `$1.5B`.
pub fn format_value(value: f64) -> String {
    let suffixes = ["", "K", "M", "B", "T"];
    let mut scaled = value;
    let mut index = 0;

    while scaled.abs() >= 1000.0 && index < suffixes.len() - 1 {
        scaled /= 1000.0;
        index += 1;
    }

    format!("${:.1}{}", scaled, suffixes[index])
}

/// Format a price with two decimals, e.g. `$123.45`.
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Format a ratio as a percentage, e.g. `0.0123` becomes `1.23%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
