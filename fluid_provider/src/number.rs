// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient number parsing for token values such as `"16px"` or `"0.5"`.

/// Length of an optional sign followed by ASCII digits at the start of `s`.
fn signed_digits(s: &str) -> (usize, usize) {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    (sign, digits)
}

/// Parses the leading integer of `s`, ignoring leading whitespace and any
/// trailing text.
///
/// Returns `None` if `s` does not start with an integer.
pub(crate) fn parse_leading_int(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let (sign, digits) = signed_digits(s);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

/// Parses the leading decimal number of `s`, ignoring leading whitespace and
/// any trailing text.
///
/// Accepts an optional sign, a fraction and an exponent. Returns `None` if
/// `s` does not start with a number.
pub(crate) fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let (sign, int_digits) = signed_digits(s);
    let mut end = sign + int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let (exp_sign, exp_digits) = signed_digits(&s[end + 1..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int() {
        assert_eq!(parse_leading_int("16px"), Some(16.0));
        assert_eq!(parse_leading_int("  -4px"), Some(-4.0));
        assert_eq!(parse_leading_int("+2"), Some(2.0));
        assert_eq!(parse_leading_int("1.5rem"), Some(1.0));
        assert_eq!(parse_leading_int("px"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn leading_float() {
        assert_eq!(parse_leading_float("0.5"), Some(0.5));
        assert_eq!(parse_leading_float("1"), Some(1.0));
        assert_eq!(parse_leading_float(" 1.25x"), Some(1.25));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("2."), Some(2.0));
        assert_eq!(parse_leading_float("-1e2px"), Some(-100.0));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("dense"), None);
    }
}
