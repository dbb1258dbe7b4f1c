//! Row types displayed by the dashboard tables.

use thiserror::Error;

mod asset;
mod event;
mod pool;
mod token;

pub use asset::{Asset, DEFAULT_ASSET_DECIMALS};
pub use event::{Event, EventColumn, EventTopic, EventType, ParseTopicError};
pub use pool::{Pool, PoolColumn, DEFAULT_POOL_FEE_BPS};
pub use token::{Token, TokenColumn};

/// A sort column name that does not exist on the table's row type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {table} column '{value}'")]
pub struct ParseColumnError {
    pub table: &'static str,
    pub value: String,
}

impl ParseColumnError {
    pub(crate) fn new(table: &'static str, value: &str) -> Self {
        Self {
            table,
            value: value.to_string(),
        }
    }
}
