pub mod cli;
pub mod config;
pub mod data;
pub mod models;
pub mod network;
pub mod table;
pub mod utils;
pub mod views;

pub use crate::config::Settings;
pub use data::Snapshot;
pub use network::{query_network, Network, QueryNetwork};
pub use table::{Order, Sortable, TableOptions, TableState, TableView};
