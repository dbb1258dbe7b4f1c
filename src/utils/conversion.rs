//! Raw amount conversion utilities.
//!
//! Reserves and event amounts arrive as integer strings in the token's
//! smallest unit. They are adjusted with BigDecimal so large values keep
//! their precision until the final f64 conversion.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};
use once_cell::sync::Lazy;
use std::str::FromStr;

// ============================================
// String to decimal Conversions
// ============================================

/// Parse a raw integer amount and shift it by `decimals` places.
///
/// Negative amounts (outgoing legs of an event) are returned as their
/// magnitude. Returns `None` for anything that is not a number.
pub fn raw_to_decimal(value_str: &str, decimals: u8) -> Option<BigDecimal> {
    let big_value = BigDecimal::from_str(value_str.trim()).ok()?;

    Some(big_value.abs() / big_pow10(decimals))
}

/// Parse a raw integer amount to a decimal-adjusted f64.
///
/// # Example
/// ```ignore
/// let adjusted = str_to_f64_with_decimals("15000000", 7); // Some(1.5)
/// ```
pub fn str_to_f64_with_decimals(value_str: &str, decimals: u8) -> Option<f64> {
    let result = raw_to_decimal(value_str, decimals)?.to_f64()?;

    if result.is_finite() {
        Some(result)
    } else {
        None
    }
}

/// Ratio `numerator / denominator` of two raw amounts after decimal adjustment.
///
/// Returns `None` when either side is missing, unparsable or the
/// denominator is zero.
pub fn raw_ratio(
    numerator: Option<&str>,
    numerator_decimals: u8,
    denominator: Option<&str>,
    denominator_decimals: u8,
) -> Option<f64> {
    let numerator = raw_to_decimal(numerator?, numerator_decimals)?;
    let denominator = raw_to_decimal(denominator?, denominator_decimals)?;

    if denominator.is_zero() {
        return None;
    }

    let result = (numerator / denominator).to_f64()?;
    result.is_finite().then_some(result)
}

// ============================================
// Internal Helpers
// ============================================

static POW10_CACHE: Lazy<[BigDecimal; 25]> =
    Lazy::new(|| std::array::from_fn(|i| BigDecimal::from(BigInt::from(10u32).pow(i as u32))));

/// Compute 10^exp as BigDecimal.
pub(crate) fn big_pow10(exp: u8) -> BigDecimal {
    if (exp as usize) < POW10_CACHE.len() {
        POW10_CACHE[exp as usize].clone()
    } else {
        BigDecimal::from(BigInt::from(10u32).pow(exp as u32))
    }
}
