//! Best-effort field coercion.
//!
//! Numbers are read from the longest leading numeric prefix of the raw text
//! (`"12.5h"` reads as `12.5`). Anything unreadable, non-finite or negative
//! zero becomes `0`. Coercion never fails; a defaulted value present in the
//! source is logged at debug level.

use tracing::debug;

/// Floating-point field, defaulting to `0.0`.
pub fn float(field: &str, raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match float_prefix(raw).and_then(|p| p.parse::<f64>().ok()) {
        Some(v) if v.is_finite() && v != 0.0 => v,
        Some(v) if v == 0.0 => 0.0,
        _ => {
            debug!(field, value = raw, "non-numeric value coerced to 0");
            0.0
        }
    }
}

/// Non-negative integer field, defaulting to `0`.
///
/// Fractional input is truncated (`"3.7"` reads as `3`); negative or
/// out-of-range input becomes `0`.
pub fn count(field: &str, raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    let Some(prefix) = int_prefix(raw) else {
        debug!(field, value = raw, "non-integer value coerced to 0");
        return 0;
    };
    if let Some(digits) = prefix.strip_prefix('-') {
        if digits.bytes().any(|b| b != b'0') {
            debug!(field, value = raw, "negative value coerced to 0");
        }
        return 0;
    }
    prefix
        .trim_start_matches('+')
        .parse::<u64>()
        .unwrap_or_else(|_| {
            debug!(field, value = raw, "out-of-range value coerced to 0");
            0
        })
}

/// Text field, falling back to `default` when absent.
pub fn text_or(raw: Option<&str>, default: &str) -> String {
    raw.unwrap_or(default).to_string()
}

/// Optional text field.
pub fn text(raw: Option<&str>) -> Option<String> {
    raw.map(str::to_string)
}

/// Longest prefix of `raw` (after leading whitespace) shaped like a decimal
/// float: sign, digits, optional fraction, optional exponent.
fn float_prefix(raw: &str) -> Option<&str> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = sign_len(bytes);

    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&bytes[exp_start..]);
        let exp_digits = digit_run(&bytes[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    s.get(..end)
}

/// Longest prefix of `raw` (after leading whitespace) shaped like an integer.
fn int_prefix(raw: &str) -> Option<&str> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s.get(..sign + digits)
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
