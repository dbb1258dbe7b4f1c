//! Bounds for indexer-provided USD values.
//!
//! Snapshot rows come from an external indexer. A value outside these bounds
//! is a calculation error upstream and is shown as missing rather than
//! dominating the top of a sorted table.
//!
//! 1. TOKEN PRICE: No legitimate token costs more than $1M per unit.
//!
//! 2. VOLUME / TVL: $100B covers the largest pools and 24h volumes with margin.
//!
//! 3. PRICE CHANGE: A 24h move above +100,000% is an empty-pool artifact.

// ============================================
// Validation Constants
// ============================================

/// Maximum reasonable token price in USD.
pub const MAX_TOKEN_USD_PRICE: f64 = 1e6;

/// Maximum reasonable 24h volume or fee total in USD for one row.
pub const MAX_VOLUME_USD: f64 = 1e11;

/// Maximum reasonable TVL in USD for one row.
pub const MAX_TVL_USD: f64 = 1e11;

/// Maximum reasonable 24h price change in percent.
pub const MAX_PRICE_CHANGE_PCT: f64 = 1e5;

// ============================================
// Validation Helpers
// ============================================

/// Keep a USD price if it is non-negative, finite and within bounds.
#[inline]
pub fn validate_usd_price(price: Option<f64>) -> Option<f64> {
    price.filter(|p| *p >= 0.0 && p.is_finite() && *p <= MAX_TOKEN_USD_PRICE)
}

/// Keep a USD volume (or fee total) if it is non-negative, finite and within bounds.
#[inline]
pub fn validate_usd_volume(volume: Option<f64>) -> Option<f64> {
    volume.filter(|v| *v >= 0.0 && v.is_finite() && *v <= MAX_VOLUME_USD)
}

/// Keep a USD TVL if it is non-negative, finite and within bounds.
#[inline]
pub fn validate_usd_tvl(tvl: Option<f64>) -> Option<f64> {
    tvl.filter(|t| *t >= 0.0 && t.is_finite() && *t <= MAX_TVL_USD)
}

/// Keep a percentage change if it is finite, not below -100% and within bounds.
#[inline]
pub fn validate_price_change(change: Option<f64>) -> Option<f64> {
    change.filter(|c| c.is_finite() && *c >= -100.0 && *c <= MAX_PRICE_CHANGE_PCT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_become_missing() {
        assert_eq!(validate_usd_price(Some(2e6)), None);
        assert_eq!(validate_usd_price(Some(-1.0)), None);
        assert_eq!(validate_usd_tvl(Some(f64::INFINITY)), None);
        assert_eq!(validate_usd_volume(Some(1e12)), None);
        assert_eq!(validate_price_change(Some(-150.0)), None);
    }

    #[test]
    fn test_in_bounds_are_kept() {
        assert_eq!(validate_usd_price(Some(0.12)), Some(0.12));
        assert_eq!(validate_usd_tvl(Some(0.0)), Some(0.0));
        assert_eq!(validate_usd_volume(None), None);
        assert_eq!(validate_price_change(Some(-12.5)), Some(-12.5));
    }
}
