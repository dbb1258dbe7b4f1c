use serde::{Deserialize, Serialize};

use crate::utils::shorten_address;

/// Decimal places of a Soroban token when the indexer omits them.
pub const DEFAULT_ASSET_DECIMALS: u8 = 7;

/// Token identity shared by token, pool and event rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub contract: String,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
}

fn default_decimals() -> u8 {
    DEFAULT_ASSET_DECIMALS
}

impl Asset {
    pub fn new(contract: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            contract: contract.into(),
            code: code.into(),
            name: None,
            icon: None,
            decimals: DEFAULT_ASSET_DECIMALS,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Full name, falling back to the code.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }

    /// Code for labels. Unnamed tokens report their contract as code, which
    /// is shortened so pair names stay readable.
    pub fn display_code(&self) -> String {
        if self.code == self.contract {
            shorten_address(&self.contract)
        } else {
            self.code.clone()
        }
    }
}
