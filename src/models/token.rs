use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Asset, ParseColumnError};
use crate::{
    table::{SortValue, Sortable},
    utils::{validate_price_change, validate_usd_price, validate_usd_tvl, validate_usd_volume},
};

/// Token row with its current market state.
///
/// Query Pattern: "List all tokens on network X by TVL"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub asset: Asset,

    // Current price state
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,

    // Rolling window stats (24h)
    #[serde(default)]
    pub volume24h: Option<f64>,

    // Liquidity across all pools
    #[serde(default)]
    pub tvl: Option<f64>,
}

/// Sortable columns of the tokens table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenColumn {
    Asset,
    Price,
    PriceChange,
    Volume24h,
    Tvl,
}

impl Token {
    pub fn new(asset: Asset) -> Self {
        Self {
            asset,
            price: None,
            price_change_24h: None,
            volume24h: None,
            tvl: None,
        }
    }

    /// Drop out-of-bounds values. Returns how many fields were cleared.
    pub fn sanitize(&mut self) -> usize {
        let before = self.known_fields();
        self.price = validate_usd_price(self.price);
        self.price_change_24h = validate_price_change(self.price_change_24h);
        self.volume24h = validate_usd_volume(self.volume24h);
        self.tvl = validate_usd_tvl(self.tvl);
        before - self.known_fields()
    }

    fn known_fields(&self) -> usize {
        [self.price, self.price_change_24h, self.volume24h, self.tvl]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

impl Sortable for Token {
    type Column = TokenColumn;

    fn sort_value(&self, column: TokenColumn) -> SortValue<'_> {
        match column {
            TokenColumn::Asset => self.asset.display_name().into(),
            TokenColumn::Price => self.price.into(),
            TokenColumn::PriceChange => self.price_change_24h.into(),
            TokenColumn::Volume24h => self.volume24h.into(),
            TokenColumn::Tvl => self.tvl.into(),
        }
    }
}

impl FromStr for TokenColumn {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" | "name" => Ok(TokenColumn::Asset),
            "price" => Ok(TokenColumn::Price),
            "change" | "price-change" => Ok(TokenColumn::PriceChange),
            "volume" | "volume24h" => Ok(TokenColumn::Volume24h),
            "tvl" => Ok(TokenColumn::Tvl),
            _ => Err(ParseColumnError::new("token", s)),
        }
    }
}
