//! Scale-round-rescale helpers.
//!
//! Reported figures are rounded by multiplying by `10^digits`, rounding to the
//! nearest integer with halves away from zero, then dividing back. Report text
//! reproduces these exact values, so callers must not substitute display
//! formatting for them.

/// Decimal digits kept for monetary figures and percentages.
pub const MONEY_DIGITS: i32 = 2;

/// Decimal digits kept for performance indices (SPI, CPI).
pub const INDEX_DIGITS: i32 = 4;

/// `value`, or `0.0` when it is infinite or NaN.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Round `value` to `digits` decimal places, halves away from zero.
///
/// Negative zero and non-finite input both come out as `0.0`. Finite values
/// too large to scale are returned unchanged (they carry no fractional part
/// anyway).
pub fn round_to(value: f64, digits: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round a monetary figure or percentage to 2 decimals.
pub fn round_money(value: f64) -> f64 {
    round_to(value, MONEY_DIGITS)
}

/// Round a performance index to 4 decimals.
pub fn round_index(value: f64) -> f64 {
    round_to(value, INDEX_DIGITS)
}
