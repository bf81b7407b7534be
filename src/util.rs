// Utility helpers for parsing and display formatting.
//
// This module centralizes all the "dirty" number handling so the rest of the
// code can assume clean, typed values and only ever carries pre-rendered
// display strings.
use chrono::{Datelike, NaiveDate};
use num_format::{Locale, ToFormattedString};

/// Placeholder shown whenever a figure is missing or cannot be read.
pub const NO_DATA: &str = "–";

// Amounts closer to zero than this render as a plain `0 €` instead of
// floating-point noise or `-0`.
const ZERO_EPSILON: f64 = 1e-6;

/// Parse a string into `f64` while being forgiving about formatting issues
/// that are common in exported JSON (whitespace, plain text, empty strings).
///
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters (`"n/a"`, `"NaN"`).
/// - Rejects values that overflow to a non-finite float.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render a utilisation fraction as a whole percent, e.g. `0.4567` as `46%`.
///
/// Rounding is half-up on the scaled value. A missing or non-finite value
/// renders as the [`NO_DATA`] placeholder.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{}%", (v * 100.0 + 0.5).floor() as i64),
        _ => NO_DATA.to_string(),
    }
}

/// Render a Euro amount in German notation: dot-grouped thousands, no
/// fractional digits, trailing currency sign, e.g. `1500.0` as `1.500 €`.
///
/// The amount is rounded half away from zero to a whole Euro. Magnitudes
/// below `ZERO_EPSILON` collapse to `0 €`; a missing or non-finite value
/// renders as the [`NO_DATA`] placeholder.
pub fn format_currency(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return NO_DATA.to_string(),
    };
    let v = if v.abs() < ZERO_EPSILON { 0.0 } else { v };
    let whole = v.round() as i64;
    format!("{} €", whole.to_formatted_string(&Locale::de))
}

/// Key of the calendar month immediately before `today`, in the `YYYY-MM`
/// form the cost lines are keyed by.
pub fn previous_month_key(today: NaiveDate) -> String {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    format!("{:04}-{:02}", year, month)
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. This is used
    // for counts in console messages (e.g., `1,204 entries loaded`).
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(format_percent(Some(0.4567)), "46%");
        assert_eq!(format_percent(Some(0.125)), "13%");
        assert_eq!(format_percent(Some(0.82)), "82%");
        assert_eq!(format_percent(Some(1.0)), "100%");
        assert_eq!(format_percent(Some(0.0)), "0%");
    }

    #[test]
    fn percent_placeholder_for_unusable_values() {
        assert_eq!(format_percent(None), NO_DATA);
        assert_eq!(format_percent(Some(f64::NAN)), NO_DATA);
    }

    #[test]
    fn currency_uses_german_grouping() {
        assert_eq!(format_currency(Some(1500.0)), "1.500 €");
        assert_eq!(format_currency(Some(2154600.0)), "2.154.600 €");
        assert_eq!(format_currency(Some(980.0)), "980 €");
        assert_eq!(format_currency(Some(-2450.0)), "-2.450 €");
    }

    #[test]
    fn currency_collapses_near_zero_noise() {
        assert_eq!(format_currency(Some(0.0000001)), "0 €");
        assert_eq!(format_currency(Some(-0.0000001)), "0 €");
        assert_eq!(format_currency(Some(0.0)), "0 €");
    }

    #[test]
    fn currency_placeholder_for_unusable_values() {
        assert_eq!(format_currency(None), NO_DATA);
        assert_eq!(format_currency(Some(f64::NAN)), NO_DATA);
        assert_eq!(format_currency(Some(f64::INFINITY)), NO_DATA);
    }

    #[test]
    fn parse_rejects_junk() {
        assert_eq!(parse_f64_safe("3000"), Some(3000.0));
        assert_eq!(parse_f64_safe(" 12.5 "), Some(12.5));
        assert_eq!(parse_f64_safe("-0.25"), Some(-0.25));
        assert_eq!(parse_f64_safe(""), None);
        assert_eq!(parse_f64_safe("   "), None);
        assert_eq!(parse_f64_safe("n/a"), None);
        assert_eq!(parse_f64_safe("NaN"), None);
    }

    #[test]
    fn previous_month_rolls_over_the_year_boundary() {
        let aug = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        assert_eq!(previous_month_key(aug), "2026-07");
        let jan = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(previous_month_key(jan), "2025-12");
    }
}
