//! Network selection from the `network` query parameter.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Network whose indexer data is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown network '{0}', expected 'mainnet' or 'testnet'")]
pub struct ParseNetworkError(pub String);

impl Network {
    /// Lower-case form used in query strings and snapshot file names.
    pub fn as_query(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("MAINNET"),
            Network::Testnet => f.write_str("TESTNET"),
        }
    }
}

impl FromStr for Network {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(ParseNetworkError(s.to_string())),
        }
    }
}

/// Outcome of reading the `network` query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryNetwork {
    /// `None` until the query string is available.
    pub network: Option<Network>,
    /// True only for the exact values `mainnet` and `testnet`.
    pub is_valid_query: bool,
    pub query: Option<String>,
}

/// Resolves the network to display for a raw `network` query value.
///
/// Validation is case-sensitive; anything other than `mainnet` or `testnet`
/// falls back to mainnet while reporting the query as invalid.
pub fn query_network(query: Option<&str>, is_ready: bool) -> QueryNetwork {
    let is_valid_query = matches!(query, Some("mainnet") | Some("testnet"));

    if !is_ready {
        return QueryNetwork {
            network: None,
            is_valid_query,
            query: None,
        };
    }

    let network = match query {
        Some("testnet") => Network::Testnet,
        _ => Network::Mainnet,
    };

    QueryNetwork {
        network: Some(network),
        is_valid_query,
        query: query.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_queries() {
        let mainnet = query_network(Some("mainnet"), true);
        assert_eq!(mainnet.network, Some(Network::Mainnet));
        assert!(mainnet.is_valid_query);

        let testnet = query_network(Some("testnet"), true);
        assert_eq!(testnet.network, Some(Network::Testnet));
        assert_eq!(testnet.query.as_deref(), Some("testnet"));
    }

    #[test]
    fn test_invalid_query_falls_back_to_mainnet() {
        let resolved = query_network(Some("TESTNET"), true);
        assert_eq!(resolved.network, Some(Network::Mainnet));
        assert!(!resolved.is_valid_query);

        let missing = query_network(None, true);
        assert_eq!(missing.network, Some(Network::Mainnet));
        assert!(!missing.is_valid_query);
        assert_eq!(missing.query, None);
    }

    #[test]
    fn test_not_ready_has_no_network() {
        let resolved = query_network(Some("testnet"), false);
        assert_eq!(resolved.network, None);
        assert!(resolved.is_valid_query);
    }

    #[test]
    fn test_display_is_upper_case() {
        assert_eq!(Network::Testnet.to_string(), "TESTNET");
        assert_eq!("Mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert!("devnet".parse::<Network>().is_err());
    }
}
