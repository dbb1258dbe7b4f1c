use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    models::{Event, Pool, Token},
    network::Network,
};

/// Materialized indexer rows for one network.
///
/// Stored as `<dir>/<network>.json`, e.g. `snapshots/mainnet.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub pools: Vec<Pool>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Snapshot {
    pub fn path(dir: &Path, network: Network) -> PathBuf {
        dir.join(format!("{}.json", network.as_query()))
    }

    /// Load and sanitize the snapshot for `network` from `dir`.
    pub fn load(dir: &Path, network: Network) -> Result<Self> {
        let path = Self::path(dir, network);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;

        let mut snapshot = Self::from_json(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;

        let cleared = snapshot.sanitize();
        if cleared > 0 {
            warn!(
                "[{}] Cleared {} out-of-bounds values from snapshot",
                network, cleared
            );
        }

        info!(
            "[{}] Loaded {} tokens, {} pools, {} events",
            network,
            snapshot.tokens.len(),
            snapshot.pools.len(),
            snapshot.events.len()
        );

        Ok(snapshot)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Clear indexer values outside sane bounds. Returns how many were cleared.
    pub fn sanitize(&mut self) -> usize {
        let tokens: usize = self.tokens.iter_mut().map(Token::sanitize).sum();
        let pools: usize = self.pools.iter_mut().map(Pool::sanitize).sum();
        tokens + pools
    }

    pub fn pool(&self, address: &str) -> Option<&Pool> {
        self.pools.iter().find(|p| p.address == address)
    }

    pub fn token(&self, contract: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.asset.contract == contract)
    }

    /// Events of one pool, in snapshot order.
    pub fn events_for_pool(&self, address: &str) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.pool_address == address)
            .cloned()
            .collect()
    }

    /// Pools that trade `contract` on either side.
    pub fn pools_for_token(&self, contract: &str) -> Vec<Pool> {
        self.pools
            .iter()
            .filter(|p| p.contains_token(contract))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "tokens": [
            {"asset": {"contract": "CXLM", "code": "XLM"}, "tvl": 1000.0, "price": 5e9},
            {"asset": {"contract": "CUSDC", "code": "USDC"}, "tvl": 800.0}
        ],
        "pools": [
            {
                "address": "CPOOL",
                "token0": {"contract": "CXLM", "code": "XLM"},
                "token1": {"contract": "CUSDC", "code": "USDC"},
                "reserve0": "1000000000",
                "reserve1": "250000000",
                "tvl": 50.0
            }
        ],
        "events": [
            {
                "txHash": "a",
                "poolAddress": "CPOOL",
                "type": "swap",
                "timestamp": "2024-03-01T12:00:00Z",
                "token0": {"contract": "CXLM", "code": "XLM"},
                "token1": {"contract": "CUSDC", "code": "USDC"}
            },
            {
                "txHash": "b",
                "poolAddress": "COTHER",
                "type": "add",
                "timestamp": "2024-03-01T12:00:00Z",
                "token0": {"contract": "CXLM", "code": "XLM"},
                "token1": {"contract": "CAQUA", "code": "AQUA"}
            }
        ]
    }"#;

    #[test]
    fn test_lookup_helpers() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();

        assert!(snapshot.pool("CPOOL").is_some());
        assert!(snapshot.pool("CMISSING").is_none());
        assert_eq!(snapshot.events_for_pool("CPOOL").len(), 1);
        assert_eq!(snapshot.pools_for_token("CUSDC").len(), 1);
        assert_eq!(snapshot.token("CUSDC").and_then(|t| t.tvl), Some(800.0));
    }

    #[test]
    fn test_sanitize_clears_absurd_prices() {
        let mut snapshot = Snapshot::from_json(SNAPSHOT).unwrap();

        assert_eq!(snapshot.sanitize(), 1);
        assert_eq!(snapshot.tokens[0].price, None);
        assert_eq!(snapshot.tokens[0].tvl, Some(1000.0));
    }

    #[test]
    fn test_path_uses_lower_case_network() {
        let path = Snapshot::path(Path::new("snapshots"), Network::Testnet);
        assert_eq!(path, PathBuf::from("snapshots/testnet.json"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
