//! Loose number conversion for CSS-facing values.
//!
//! Component inputs arrive as text and numbers end up back in CSS text, so
//! both directions follow the rules stylesheet authors already expect from
//! the browser: an empty string reads as `0`, `Infinity` and `0x` literals are
//! numbers, and very large or very small values print with an exponent.

use nom::{combinator::all_consuming, number::complete::recognize_float};

/// Reads `token` as a number, or `None` when it is not one.
///
/// Accepts decimal literals with optional sign, fraction and exponent,
/// `0x`/`0o`/`0b` integer literals, `Infinity` with an optional sign, and the
/// empty string (as `0`). `NaN`, `inf` and the like are not numbers.
pub fn parse_number(token: &str) -> Option<f64> {
    match token {
        "" => return Some(0.0),
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(token) {
        return n;
    }

    all_consuming(recognize_float::<_, nom::error::Error<&str>>)(token)
        .ok()
        .and_then(|(_, float)| float.parse().ok())
}

/// `Some(result)` when `token` carries a radix prefix, `None` otherwise.
fn parse_radix_literal(token: &str) -> Option<Option<f64>> {
    let radix = match token.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &token[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    }))
}

/// Formats `n` the way it would appear in generated CSS text.
///
/// Integers print without a fraction, magnitudes from `1e21` up and below
/// `1e-6` use exponent notation (`1e+21`, `1e-7`), and non-finite values
/// print as `Infinity`, `-Infinity` or `NaN`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{n:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("-1.5"), Some(-1.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("+3"), Some(3.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_number(""), Some(0.0));
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("infinity"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_parse_radix_literals() {
        assert_eq!(parse_number("0x10"), Some(16.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0xfg"), None);
        assert_eq!(parse_number("-0x10"), None);
    }

    #[test]
    fn test_parse_rejects_words() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("auto"), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("1e"), None);
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(123456789.0), "123456789");
    }

    #[test]
    fn test_format_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
