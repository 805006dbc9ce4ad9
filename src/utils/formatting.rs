//! Formatting helpers for CLI outputs.

/// "£50.00" style money rendering.
pub fn fmt_amount(value: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, value)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Render an optional text field, "--" when absent.
pub fn opt_or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

/// Same for optional ids.
pub fn id_or_dash(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "--".into())
}
