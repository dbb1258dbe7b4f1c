//! Generic sortable and paginated table view.
//!
//! - [`order`] - Sort direction
//! - [`sort`] - Column values, comparator and stable row sorting
//! - [`state`] - Per-table sort/page state and the rendered page

mod order;
mod sort;
mod state;

pub use order::{Order, ParseOrderError};
pub use sort::{sort_rows, SortValue, Sortable};
pub use state::{TableOptions, TableState, TableView};
