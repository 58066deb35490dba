//! Display-text number handling.
//!
//! The display is a numeric literal under construction (`"0"`, `"12"`, `"12.5"`,
//! `"0."`) or the literal error marker. This module owns the two conversions at
//! that boundary: parsing the display into an exact [`Decimal`] operand, and
//! formatting a backend result back into canonical display text.
//!
//! Formatting is canonical decimal: no scientific notation, no forced trailing
//! zeros. `parse_display(&format_value(x))` reproduces `x` exactly for every
//! representable value, which is what lets a shown result be re-parsed as the
//! next first operand without drift.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Display text shown after a failed calculation.
pub const ERROR_TEXT: &str = "Error";

/// Parses display text into an exact decimal operand.
///
/// Accepts a literal under construction, including one with a trailing decimal
/// point (`"0."` parses as zero). Returns `None` for the error marker or any
/// text that is not a decimal literal.
///
/// # Examples
///
/// ```
/// use remcalc::domain::number::parse_display;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_display("12.5"), Some(Decimal::new(125, 1)));
/// assert_eq!(parse_display("0."), Some(Decimal::ZERO));
/// assert_eq!(parse_display("Error"), None);
/// ```
#[must_use]
pub fn parse_display(display: &str) -> Option<Decimal> {
    if display == ERROR_TEXT {
        return None;
    }
    // A literal under construction may end in a bare decimal point.
    let literal = display.strip_suffix('.').unwrap_or(display);
    Decimal::from_str(literal).ok()
}

/// Formats a calculation result as canonical display text.
///
/// Normalizes the value first so trailing zeros from backend arithmetic
/// (`"7.00"`) never reach the display.
///
/// # Examples
///
/// ```
/// use remcalc::domain::number::format_value;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_value(Decimal::new(700, 2)), "7");
/// assert_eq!(format_value(Decimal::new(-125, 1)), "-12.5");
/// ```
#[must_use]
pub fn format_value(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_fractional_literals() {
        assert_eq!(parse_display("0"), Some(Decimal::ZERO));
        assert_eq!(parse_display("42"), Some(Decimal::from(42)));
        assert_eq!(parse_display("12.5"), Some(Decimal::new(125, 1)));
    }

    #[test]
    fn trailing_decimal_point_parses_as_whole_number() {
        assert_eq!(parse_display("12."), Some(Decimal::from(12)));
        assert_eq!(parse_display("0."), Some(Decimal::ZERO));
    }

    #[test]
    fn error_marker_and_garbage_are_rejected() {
        assert_eq!(parse_display(ERROR_TEXT), None);
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display("1.2.3"), None);
    }

    #[test]
    fn negative_results_parse_back() {
        assert_eq!(parse_display("-3.5"), Some(Decimal::new(-35, 1)));
    }

    #[test]
    fn formatting_strips_trailing_zeros() {
        assert_eq!(format_value(Decimal::new(2500, 2)), "25");
        assert_eq!(format_value(Decimal::new(2510, 2)), "25.1");
        assert_eq!(format_value(Decimal::ZERO), "0");
    }

    #[test]
    fn format_parse_round_trip_is_exact() {
        for text in ["0", "7", "-9", "12.5", "0.0001", "123456789.987654321"] {
            let value = parse_display(text).expect("parse");
            assert_eq!(parse_display(&format_value(value)), Some(value));
        }
    }
}
