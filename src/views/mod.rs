//! Text renderers for the dashboard pages.
//!
//! - [`grid`] - Column layout of formatted cells
//! - [`layout`] - Breadcrumbs, titles and loading placeholders
//! - [`data_table`] - Sortable, paginated table over any [`TableRow`]
//! - [`tokens_table`], [`pools_table`], [`transactions_table`] - Row layouts
//! - [`pages`], [`pool_page`] - Full pages

pub mod data_table;
pub mod grid;
pub mod layout;
pub mod pages;
pub mod pool_page;
pub mod pools_table;
pub mod tokens_table;
pub mod transactions_table;

pub use data_table::{DataTable, HeadCell, TableRow};
pub use pages::{PoolsPage, TokenPage, TokensPage};
pub use pool_page::PoolPage;
pub use transactions_table::TransactionsTable;
