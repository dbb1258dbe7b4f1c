use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Asset, ParseColumnError};
use crate::{
    table::{SortValue, Sortable},
    utils::{expected_amount_of_one, validate_usd_tvl, validate_usd_volume},
};

/// Constant-product fee in basis points (0.3%).
pub const DEFAULT_POOL_FEE_BPS: u32 = 30;

/// Liquidity pool row with its current state.
///
/// Query Pattern: "Get pool info for address X on network Y"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub address: String,

    // Token pair
    pub token0: Asset,
    pub token1: Asset,

    // Raw reserves (smallest unit, integer strings)
    #[serde(default)]
    pub reserve0: Option<String>,
    #[serde(default)]
    pub reserve1: Option<String>,

    // USD stats
    #[serde(default)]
    pub tvl: Option<f64>,
    #[serde(default)]
    pub volume24h: Option<f64>,
    #[serde(default)]
    pub fees24h: Option<f64>,

    /// Swap fee in basis points
    #[serde(default = "default_fee_bps")]
    pub fee_bps: u32,
}

fn default_fee_bps() -> u32 {
    DEFAULT_POOL_FEE_BPS
}

/// Sortable columns of the pools table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolColumn {
    Name,
    Tvl,
    Volume24h,
    Fees24h,
}

impl Pool {
    pub fn new(address: impl Into<String>, token0: Asset, token1: Asset) -> Self {
        Self {
            address: address.into(),
            token0,
            token1,
            reserve0: None,
            reserve1: None,
            tvl: None,
            volume24h: None,
            fees24h: None,
            fee_bps: DEFAULT_POOL_FEE_BPS,
        }
    }

    /// Pair label, e.g. `XLM/USDC`.
    pub fn name(&self) -> String {
        format!("{}/{}", self.token0.display_code(), self.token1.display_code())
    }

    /// Fee chip label, e.g. `0.3%`.
    pub fn fee_label(&self) -> String {
        format!("{}%", self.fee_bps as f64 / 100.0)
    }

    /// Price of one token0 in token1.
    pub fn token0_price(&self) -> f64 {
        expected_amount_of_one(
            self.reserve0.as_deref(),
            self.token0.decimals,
            self.reserve1.as_deref(),
            self.token1.decimals,
        )
    }

    /// Price of one token1 in token0.
    pub fn token1_price(&self) -> f64 {
        expected_amount_of_one(
            self.reserve1.as_deref(),
            self.token1.decimals,
            self.reserve0.as_deref(),
            self.token0.decimals,
        )
    }

    pub fn contains_token(&self, contract: &str) -> bool {
        self.token0.contract == contract || self.token1.contract == contract
    }

    /// Drop out-of-bounds values. Returns how many fields were cleared.
    pub fn sanitize(&mut self) -> usize {
        let before = self.known_fields();
        self.tvl = validate_usd_tvl(self.tvl);
        self.volume24h = validate_usd_volume(self.volume24h);
        self.fees24h = validate_usd_volume(self.fees24h);
        before - self.known_fields()
    }

    fn known_fields(&self) -> usize {
        [self.tvl, self.volume24h, self.fees24h]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

impl Sortable for Pool {
    type Column = PoolColumn;

    fn sort_value(&self, column: PoolColumn) -> SortValue<'_> {
        match column {
            PoolColumn::Name => self.name().into(),
            PoolColumn::Tvl => self.tvl.into(),
            PoolColumn::Volume24h => self.volume24h.into(),
            PoolColumn::Fees24h => self.fees24h.into(),
        }
    }
}

impl FromStr for PoolColumn {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "pool" => Ok(PoolColumn::Name),
            "tvl" => Ok(PoolColumn::Tvl),
            "volume" | "volume24h" => Ok(PoolColumn::Volume24h),
            "fees" | "fees24h" => Ok(PoolColumn::Fees24h),
            _ => Err(ParseColumnError::new("pool", s)),
        }
    }
}
