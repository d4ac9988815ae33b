//! Brazilian-locale money and percentage formatting.
//!
//! Amounts render with `.` as the thousands separator and `,` as the
//! decimal separator, prefixed with the currency symbol. Negative
//! amounts carry the sign before the prefix (`-R$ 1.234,56`); a value
//! that rounds to zero renders unsigned.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::{CURRENCY_SYMBOL, DISPLAY_DECIMAL_PRECISION};
use crate::errors::{Error, Result};

/// Formats an amount as BRL with cents, e.g. `R$ 1.234,56`.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let abs = rounded.abs();
    format!(
        "{}{} {},{:02}",
        sign_of(rounded),
        CURRENCY_SYMBOL,
        group_thousands(&abs.trunc().to_string()),
        cents_of(abs)
    )
}

/// Formats an amount as BRL without cents, e.g. `R$ 1.251`.
///
/// The value is rounded to the nearest integer, not truncated.
pub fn format_amount_no_decimals(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    format!(
        "{}{} {}",
        sign_of(rounded),
        CURRENCY_SYMBOL,
        group_thousands(&rounded.abs().to_string())
    )
}

/// Formats a value already scaled to percent, e.g. `18,75%`.
///
/// Two fractional digits with the comma decimal separator; no
/// thousands grouping and no space before the percent sign.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let abs = rounded.abs();
    format!(
        "{}{},{:02}%",
        sign_of(rounded),
        abs.trunc(),
        cents_of(abs)
    )
}

/// Parses a BRL-formatted numeric string, e.g. `1.500,00`, into a
/// [`Decimal`].
///
/// Dots are thousands separators and are stripped; at most one comma
/// marks the decimal part. Anything outside digits, separators and a
/// minus sign is rejected with [`Error::InvalidNumericFormat`].
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidNumericFormat(
            "value cannot be empty".to_string(),
        ));
    }
    if trimmed
        .chars()
        .any(|c| !c.is_ascii_digit() && !matches!(c, '.' | ',' | '-'))
    {
        return Err(Error::InvalidNumericFormat(format!(
            "invalid characters in '{trimmed}'"
        )));
    }
    if trimmed.matches(',').count() > 1 {
        return Err(Error::InvalidNumericFormat(format!(
            "more than one decimal comma in '{trimmed}'"
        )));
    }

    let normalized = trimmed.replace('.', "").replace(',', ".");
    normalized.parse::<Decimal>().map_err(|_| {
        Error::InvalidNumericFormat(format!("could not read '{trimmed}' as an amount"))
    })
}

fn sign_of(rounded: Decimal) -> &'static str {
    if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    }
}

/// Fractional part of a non-negative amount as whole cents (0..=99).
fn cents_of(abs: Decimal) -> u32 {
    (abs.fract() * dec!(100)).to_u32().unwrap_or(0)
}

/// Inserts a `.` between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_uses_pt_br_separators() {
        assert_eq!(format_amount(dec!(1234.56)), "R$ 1.234,56");
    }

    #[test]
    fn test_format_amount_groups_millions() {
        assert_eq!(format_amount(dec!(1234567.89)), "R$ 1.234.567,89");
        assert_eq!(format_amount(dec!(1000000)), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_amount_small_values() {
        assert_eq!(format_amount(dec!(0.5)), "R$ 0,50");
        assert_eq!(format_amount(dec!(0)), "R$ 0,00");
        assert_eq!(format_amount(dec!(999.999)), "R$ 1.000,00");
    }

    #[test]
    fn test_format_amount_negative_sign_before_prefix() {
        assert_eq!(format_amount(dec!(-1234.56)), "-R$ 1.234,56");
        // Rounds to zero: the sign is dropped.
        assert_eq!(format_amount(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn test_format_amount_no_decimals_rounds_to_nearest() {
        assert_eq!(format_amount_no_decimals(dec!(1250.75)), "R$ 1.251");
        assert_eq!(format_amount_no_decimals(dec!(1250.25)), "R$ 1.250");
        assert_eq!(format_amount_no_decimals(dec!(1250)), "R$ 1.250");
    }

    #[test]
    fn test_format_amount_no_decimals_negative() {
        assert_eq!(format_amount_no_decimals(dec!(-1250.75)), "-R$ 1.251");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(18.75)), "18,75%");
        assert_eq!(format_percent(dec!(100)), "100,00%");
        assert_eq!(format_percent(dec!(0.333)), "0,33%");
        assert_eq!(format_percent(dec!(-10)), "-10,00%");
    }

    #[test]
    fn test_format_percent_has_no_grouping() {
        assert_eq!(format_percent(dec!(1234.5)), "1234,50%");
    }

    #[test]
    fn test_parse_amount_brl_shapes() {
        assert_eq!(parse_amount("1.500,00").unwrap(), dec!(1500.00));
        assert_eq!(parse_amount("1500").unwrap(), dec!(1500));
        assert_eq!(parse_amount("600.822.115,84").unwrap(), dec!(600822115.84));
        assert_eq!(parse_amount("123,45").unwrap(), dec!(123.45));
        assert_eq!(parse_amount(" 10,5 ").unwrap(), dec!(10.5));
        assert_eq!(parse_amount("-10,50").unwrap(), dec!(-10.50));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("abc").unwrap_err(),
            Error::InvalidNumericFormat(_)
        ));
        assert!(matches!(
            parse_amount("").unwrap_err(),
            Error::InvalidNumericFormat(_)
        ));
        assert!(matches!(
            parse_amount("1,2,3").unwrap_err(),
            Error::InvalidNumericFormat(_)
        ));
        assert!(matches!(
            parse_amount("R$ 10").unwrap_err(),
            Error::InvalidNumericFormat(_)
        ));
    }

    #[test]
    fn test_parse_amount_stray_minus_is_rejected() {
        assert!(parse_amount("10-0").is_err());
        assert!(parse_amount("-").is_err());
    }
}
