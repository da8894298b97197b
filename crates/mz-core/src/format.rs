//! Display formatting for hour values.
//!
//! Payroll documents use two decimals and a German decimal comma.

/// Formats hours with two decimals and a decimal comma (`8.5` -> `"8,50"`).
pub fn format_hours(hours: f64) -> String {
    let formatted = format!("{hours:.2}").replace('.', ",");
    // Rounding can produce "-0,00".
    if formatted == "-0,00" {
        "0,00".to_string()
    } else {
        formatted
    }
}

/// Formats minutes as hours (`90` -> `"1,50"`).
#[allow(clippy::cast_precision_loss)]
pub fn format_minutes_as_hours(minutes: i64) -> String {
    format_hours(minutes as f64 / 60.0)
}

/// Formats hours with an explicit sign for overtime balances (`"+1,50"`).
pub fn format_signed_hours(hours: f64) -> String {
    let formatted = format_hours(hours);
    if formatted.starts_with('-') || formatted == "0,00" {
        formatted
    } else {
        format!("+{formatted}")
    }
}
