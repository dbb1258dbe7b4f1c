//! Utility functions for the dashboard.
//!
//! This module is organized into focused submodules:
//!
//! - [`validation`] - Bounds for indexer-provided USD values
//! - [`conversion`] - Raw integer amounts to decimal-adjusted values
//! - [`price`] - Exchange rates from pool reserves
//! - [`format`] - Money, token and address formatting

mod conversion;
mod format;
mod price;
mod validation;

// ============================================
// Re-exports
// ============================================

// Conversion utilities
pub use conversion::{raw_ratio, raw_to_decimal, str_to_f64_with_decimals};

// Formatting utilities
pub use format::{
    format_number_to_money, format_number_to_token, format_token_amount, shorten_address,
    DEFAULT_MONEY_DECIMALS,
};

// Price utilities
pub use price::expected_amount_of_one;

// Validation utilities
pub use validation::{
    validate_price_change, validate_usd_price, validate_usd_tvl, validate_usd_volume,
    MAX_TOKEN_USD_PRICE, MAX_TVL_USD, MAX_VOLUME_USD,
};
