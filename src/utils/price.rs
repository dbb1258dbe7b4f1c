//! Exchange rate helpers for the pool page.

use super::conversion::raw_ratio;

/// Amount of the other token one unit of token A buys at the pool's
/// current reserves, i.e. `reserve_b / reserve_a` after decimal adjustment.
///
/// Returns 0.0 while reserves are unknown or the pool is empty.
///
/// # Arguments
/// * `reserve_a` / `decimals_a` - Raw reserve of the token being priced
/// * `reserve_b` / `decimals_b` - Raw reserve of the token it is priced in
pub fn expected_amount_of_one(
    reserve_a: Option<&str>,
    decimals_a: u8,
    reserve_b: Option<&str>,
    decimals_b: u8,
) -> f64 {
    raw_ratio(reserve_b, decimals_b, reserve_a, decimals_a).unwrap_or(0.0)
}
