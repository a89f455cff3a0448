//! Input parsing and display rounding
//!
//! The engine keeps full precision. What the user sees is rounded to a
//! fixed number of significant digits and printed in its shortest form:
//! `123.456789` at 6 digits shows as `123.457`, `2.50000` as `2.5`.

use akademix_core::{Number, DEFAULT_PRECISION};

pub use akademix_plugin::DEFAULT_DISPLAY_DIGITS;

/// Raw text of a value field -> number.
///
/// Blank or unparseable text is "no value", never zero. Digit-group
/// separators such as `1_000` are not accepted.
pub fn parse_input(raw: &str) -> Option<Number> {
    parse_input_with_precision(raw, DEFAULT_PRECISION)
}

/// [`parse_input`] at a working precision other than the default
pub fn parse_input_with_precision(raw: &str, precision: usize) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    Number::from_str_with_precision(trimmed, precision).ok()
}

/// Round to `digits` significant digits and strip redundant formatting.
///
/// Exponent notation is used only for magnitudes at or above `1e21` or
/// below `1e-6`, written as `1.5e+21` / `2e-7`. Rounding happens on the
/// decimal value itself, so magnitudes beyond the f64 range still render.
pub fn format_significant(value: &Number, digits: u32) -> String {
    let digits = digits.clamp(1, 17) as usize;
    let Some((negative, mantissa, exponent)) = value.to_significant(digits) else {
        return "0".to_string();
    };
    let sign = if negative { "-" } else { "" };

    if (-6..21).contains(&exponent) {
        return format!("{}{}", sign, plain(&mantissa, exponent));
    }

    let (head, tail) = mantissa.split_at(1);
    let body = if tail.is_empty() { head.to_string() } else { format!("{}.{}", head, tail) };
    if exponent < 0 {
        format!("{}{}e{}", sign, body, exponent)
    } else {
        format!("{}{}e+{}", sign, body, exponent)
    }
}

/// Empty result renders as empty text
pub fn format_result(value: Option<&Number>, digits: u32) -> String {
    value.map(|v| format_significant(v, digits)).unwrap_or_default()
}

/// Positional notation of `0.mantissa * 10^(exponent + 1)`
fn plain(mantissa: &str, exponent: isize) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, mantissa);
    }
    let int_len = exponent as usize + 1;
    if mantissa.len() <= int_len {
        format!("{}{}", mantissa, "0".repeat(int_len - mantissa.len()))
    } else {
        let (int_part, frac_part) = mantissa.split_at(int_len);
        format!("{}.{}", int_part, frac_part)
    }
}
