use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Asset, ParseColumnError};
use crate::{
    table::{SortValue, Sortable},
    utils::str_to_f64_with_decimals,
};

/// Kind of pool event shown in the transactions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Swap,
    Add,
    Remove,
    Sync,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Swap => f.write_str("Swap"),
            EventType::Add => f.write_str("Add"),
            EventType::Remove => f.write_str("Remove"),
            EventType::Sync => f.write_str("Sync"),
        }
    }
}

/// Pool event (swap, add/remove liquidity, sync) from the indexer.
///
/// Amounts are raw integer strings in each token's smallest unit.
///
/// Query Pattern: "Get latest events for pool X"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    // Identifiers
    pub tx_hash: String,
    pub pool_address: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,

    // Topology
    pub token0: Asset,
    pub token1: Asset,

    // Amounts (raw)
    #[serde(default)]
    pub amount0: Option<String>,
    #[serde(default)]
    pub amount1: Option<String>,

    // Actor
    #[serde(default)]
    pub account: Option<String>,
}

/// Sortable columns of the transactions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Type,
    Amount0,
    Amount1,
    Account,
    Time,
}

impl Event {
    /// Decimal-adjusted amount of token0.
    pub fn amount0_adjusted(&self) -> Option<f64> {
        self.amount0
            .as_deref()
            .and_then(|a| str_to_f64_with_decimals(a, self.token0.decimals))
    }

    /// Decimal-adjusted amount of token1.
    pub fn amount1_adjusted(&self) -> Option<f64> {
        self.amount1
            .as_deref()
            .and_then(|a| str_to_f64_with_decimals(a, self.token1.decimals))
    }

    /// Human description, e.g. `Swap XLM for USDC`.
    ///
    /// A swap's direction follows the sign of `amount0`: a positive amount
    /// means token0 went into the pool.
    pub fn description(&self) -> String {
        let code0 = self.token0.display_code();
        let code1 = self.token1.display_code();
        match self.event_type {
            EventType::Swap => {
                let token0_out = self
                    .amount0
                    .as_deref()
                    .is_some_and(|a| a.trim_start().starts_with('-'));
                if token0_out {
                    format!("Swap {} for {}", code1, code0)
                } else {
                    format!("Swap {} for {}", code0, code1)
                }
            }
            EventType::Add => format!("Add {} and {}", code0, code1),
            EventType::Remove => format!("Remove {} and {}", code0, code1),
            EventType::Sync => format!("Sync {}/{}", code0, code1),
        }
    }
}

impl Sortable for Event {
    type Column = EventColumn;

    fn sort_value(&self, column: EventColumn) -> SortValue<'_> {
        match column {
            EventColumn::Type => self.description().into(),
            EventColumn::Amount0 => self.amount0_adjusted().into(),
            EventColumn::Amount1 => self.amount1_adjusted().into(),
            EventColumn::Account => self.account.as_deref().into(),
            EventColumn::Time => self.timestamp.into(),
        }
    }
}

impl FromStr for EventColumn {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "type" => Ok(EventColumn::Type),
            "amount0" => Ok(EventColumn::Amount0),
            "amount1" => Ok(EventColumn::Amount1),
            "account" => Ok(EventColumn::Account),
            "time" | "timestamp" => Ok(EventColumn::Time),
            _ => Err(ParseColumnError::new("transaction", s)),
        }
    }
}

/// Transaction type filter above the transactions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTopic {
    #[default]
    All,
    Swap,
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown transaction filter '{0}', expected all, swap, add or remove")]
pub struct ParseTopicError(pub String);

impl EventTopic {
    pub const ALL: [EventTopic; 4] = [
        EventTopic::All,
        EventTopic::Swap,
        EventTopic::Add,
        EventTopic::Remove,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventTopic::All => "All",
            EventTopic::Swap => "Swaps",
            EventTopic::Add => "Adds",
            EventTopic::Remove => "Removes",
        }
    }

    /// Event type the indexer is queried for, `None` for all events.
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventTopic::All => None,
            EventTopic::Swap => Some(EventType::Swap),
            EventTopic::Add => Some(EventType::Add),
            EventTopic::Remove => Some(EventType::Remove),
        }
    }

    /// `All` also hides sync events, which carry no user action.
    pub fn matches(&self, event: &Event) -> bool {
        match self.event_type() {
            Some(event_type) => event.event_type == event_type,
            None => event.event_type != EventType::Sync,
        }
    }
}

impl FromStr for EventTopic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(EventTopic::All),
            "swap" | "swaps" => Ok(EventTopic::Swap),
            "add" | "adds" => Ok(EventTopic::Add),
            "remove" | "removes" => Ok(EventTopic::Remove),
            _ => Err(ParseTopicError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{sort_rows, Order};
    use chrono::TimeZone;

    fn event(event_type: EventType, amount0: &str, secs: i64) -> Event {
        Event {
            tx_hash: format!("tx{}", secs),
            pool_address: String::from("CPOOL"),
            event_type,
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            token0: Asset::new("CXLM", "XLM"),
            token1: Asset::new("CUSDC", "USDC"),
            amount0: Some(amount0.to_string()),
            amount1: Some(String::from("50000000")),
            account: None,
        }
    }

    #[test]
    fn test_swap_description_follows_direction() {
        assert_eq!(
            event(EventType::Swap, "10000000", 1).description(),
            "Swap XLM for USDC"
        );
        assert_eq!(
            event(EventType::Swap, "-10000000", 1).description(),
            "Swap USDC for XLM"
        );
        assert_eq!(
            event(EventType::Add, "1", 1).description(),
            "Add XLM and USDC"
        );
    }

    #[test]
    fn test_adjusted_amounts_are_magnitudes() {
        let row = event(EventType::Swap, "-25000000", 1);
        assert_eq!(row.amount0_adjusted(), Some(2.5));
        assert_eq!(row.amount1_adjusted(), Some(5.0));
    }

    #[test]
    fn test_sort_by_time_descending() {
        let rows = vec![
            event(EventType::Swap, "1", 100),
            event(EventType::Swap, "1", 300),
            event(EventType::Swap, "1", 200),
        ];

        let sorted = sort_rows(&rows, EventColumn::Time, Order::Desc);
        let hashes: Vec<&str> = sorted.iter().map(|e| e.tx_hash.as_str()).collect();
        assert_eq!(hashes, vec!["tx300", "tx200", "tx100"]);
    }

    #[test]
    fn test_topic_filter() {
        let swap = event(EventType::Swap, "1", 1);
        let sync = event(EventType::Sync, "1", 1);

        assert!(EventTopic::All.matches(&swap));
        assert!(!EventTopic::All.matches(&sync));
        assert!(EventTopic::Swap.matches(&swap));
        assert!(!EventTopic::Remove.matches(&swap));
        assert_eq!("swaps".parse::<EventTopic>(), Ok(EventTopic::Swap));
    }

    #[test]
    fn test_deserialize_event() {
        let json = r#"{
            "txHash": "abc",
            "poolAddress": "CPOOL",
            "type": "remove",
            "timestamp": "2024-03-01T12:00:00Z",
            "token0": {"contract": "CXLM", "code": "XLM"},
            "token1": {"contract": "CUSDC", "code": "USDC"},
            "amount0": "10000000"
        }"#;
        let row: Event = serde_json::from_str(json).unwrap();
        assert_eq!(row.event_type, EventType::Remove);
        assert_eq!(row.amount1, None);
    }
}
