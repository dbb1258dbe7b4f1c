//! Row source for the dashboard.
//!
//! Rows are fetched by an external indexer and handed over as per-network
//! JSON snapshots; everything downstream works on the loaded [`Snapshot`].

mod snapshot;

pub use snapshot::Snapshot;
