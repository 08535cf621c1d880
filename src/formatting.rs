//! Display formatting for the financial panel.
//!
//! Money: currency symbol + amount scaled to the display unit + unit suffix,
//! e.g. "¥5000亿" or "$1.5B". Ratios: fraction times 100 with one decimal and
//! a percent sign. Unknown values render as "N/A".

use crate::models::{Language, UnitScale, NOT_AVAILABLE};

/// Format an amount in base currency units for display.
pub fn format_scaled_money(
    value: Option<f64>,
    symbol: &str,
    unit: UnitScale,
    language: Language,
) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => {
            let decimals = language.money_decimals();
            format!(
                "{}{:.*}{}",
                symbol,
                decimals,
                round_half_away_from_zero(v / unit.divider(), decimals),
                unit.suffix(language)
            )
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a decimal fraction as a percentage with one decimal place.
/// Example: 0.153 -> "15.3%"
pub fn format_ratio_percent(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.1}%", round_half_away_from_zero(v * 100.0, 1)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Round to `decimals` places with exact halves going away from zero
/// (2.5 -> 3, -1.25 -> -1.3), unlike `{:.N}` which rounds halves to even.
fn round_half_away_from_zero(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Render a legacy display-unit number without trailing zeros (6023.0 -> "6023").
pub fn format_plain_number(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// Chart axis ceiling: 20% headroom, rounded up, never below 10.
pub fn axis_max<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);

    if max.is_finite() {
        (max * 1.2).ceil().max(10.0)
    } else {
        10.0
    }
}
