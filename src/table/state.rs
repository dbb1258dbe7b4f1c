use log::debug;

use super::{sort_rows, Order, Sortable};

/// Initial configuration of a table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions<K> {
    pub default_order: Order,
    pub default_order_by: K,
    pub items_per_page: usize,
}

/// Sort and page state owned by one rendered table.
///
/// Rows are never stored here: they are handed to [`TableState::view`] on
/// every render, and the state only remembers how to slice them.
///
/// Policies:
/// - Re-sorting keeps the current page; [`TableState::view`] clamps it if the
///   row count shrank.
/// - Changing rows-per-page jumps back to the first page.
/// - A page size of zero is treated as one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState<K> {
    order: Order,
    order_by: K,
    page: usize,
    rows_per_page: usize,
}

impl<K: Copy + Eq + std::fmt::Debug> TableState<K> {
    pub fn new(options: TableOptions<K>) -> Self {
        Self {
            order: options.default_order,
            order_by: options.default_order_by,
            page: 0,
            rows_per_page: options.items_per_page.max(1),
        }
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn order_by(&self) -> K {
        self.order_by
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Clicking the active column flips its direction, any other column
    /// becomes active in ascending order.
    pub fn request_sort(&mut self, column: K) {
        if self.order_by == column {
            self.order = self.order.flipped();
        } else {
            self.order_by = column;
            self.order = Order::Asc;
        }
        debug!("Table sorted by {:?} {}", self.order_by, self.order);
    }

    /// Moves to `page`, clamped to the last page for `total_rows`.
    pub fn change_page(&mut self, page: usize, total_rows: usize) {
        let last = page_count(total_rows, self.rows_per_page) - 1;
        if page > last {
            debug!("Requested page {} clamped to {}", page, last);
        }
        self.page = page.min(last);
    }

    /// Sets the direction of the active column without changing the column.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
        debug!("Table sorted by {:?} {}", self.order_by, self.order);
    }

    /// Back to the first page, e.g. after the row set was filtered.
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    pub fn change_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page.max(1);
        self.page = 0;
    }

    pub fn page_count(&self, total_rows: usize) -> usize {
        page_count(total_rows, self.rows_per_page)
    }

    /// Sorts `rows` and cuts out the current page.
    pub fn view<'a, R, I>(&self, rows: I) -> TableView<'a, R>
    where
        R: Sortable<Column = K> + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let sorted = sort_rows(rows, self.order_by, self.order);
        let total_rows = sorted.len();
        let page_count = self.page_count(total_rows);
        let page = self.page.min(page_count - 1);
        let start = page * self.rows_per_page;

        let visible_rows: Vec<&R> = sorted
            .into_iter()
            .skip(start)
            .take(self.rows_per_page)
            .collect();

        TableView {
            empty_rows: self.rows_per_page.saturating_sub(visible_rows.len()),
            visible_rows,
            page,
            page_count,
            total_rows,
            rows_per_page: self.rows_per_page,
            order: self.order,
            order_by: self.order_by,
        }
    }
}

/// Number of pages for `total_rows`. An empty table still has one page.
fn page_count(total_rows: usize, rows_per_page: usize) -> usize {
    total_rows.div_ceil(rows_per_page.max(1)).max(1)
}

/// One render of a table: the visible page plus its pagination metadata.
#[derive(Debug, Clone)]
pub struct TableView<'a, R: Sortable> {
    pub visible_rows: Vec<&'a R>,
    /// Filler rows that keep the table height constant on a short page.
    pub empty_rows: usize,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
    pub rows_per_page: usize,
    pub order: Order,
    pub order_by: R::Column,
}

impl<R: Sortable> TableView<'_, R> {
    /// Index of the first visible row within the sorted sequence.
    pub fn offset(&self) -> usize {
        self.page * self.rows_per_page
    }

    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }

    /// Pagination footer, e.g. `11–20 of 42`.
    pub fn range_label(&self) -> String {
        if self.visible_rows.is_empty() {
            return format!("0–0 of {}", self.total_rows);
        }
        let first = self.offset() + 1;
        let last = self.offset() + self.visible_rows.len();
        format!("{}–{} of {}", first, last, self.total_rows)
    }
}
