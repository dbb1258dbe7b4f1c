//! Sortable, paginated table component shared by the token, pool and
//! transaction listings.

use crate::table::{Order, Sortable, TableOptions, TableState, TableView};

use super::{
    grid::{Align, GridColumn, TextGrid},
    layout::skeleton,
};

/// One sortable column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadCell<K> {
    pub id: K,
    pub label: &'static str,
    pub numeric: bool,
}

impl<K: PartialEq> HeadCell<K> {
    /// Header text with the sort arrow when this column is active.
    pub fn title(&self, order: Order, order_by: K) -> String {
        if self.id == order_by {
            format!("{} {}", self.label, order.arrow())
        } else {
            self.label.to_string()
        }
    }

    pub fn align(&self) -> Align {
        if self.numeric {
            Align::Right
        } else {
            Align::Left
        }
    }
}

/// A row type with a table layout.
pub trait TableRow: Sortable + Sized {
    const HEAD_CELLS: &'static [HeadCell<Self::Column>];
    const EMPTY_MESSAGE: &'static str;
    /// Prefix each row with its 1-based position on the page.
    const NUMBERED: bool;
    const DEFAULT_ORDER: Order;

    fn default_order_by() -> Self::Column;

    /// Formatted cells, one per head cell.
    fn cells(&self) -> Vec<String>;
}

/// Lines the loading placeholder occupies.
const SKELETON_LINES: usize = 6;

/// A table instance: owns sort/page state, borrows rows per render.
#[derive(Debug, Clone)]
pub struct DataTable<R: TableRow> {
    state: TableState<R::Column>,
}

impl<R: TableRow> DataTable<R> {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            state: TableState::new(TableOptions {
                default_order: R::DEFAULT_ORDER,
                default_order_by: R::default_order_by(),
                items_per_page,
            }),
        }
    }

    pub fn state(&self) -> &TableState<R::Column> {
        &self.state
    }

    /// Header click.
    pub fn request_sort(&mut self, column: R::Column) {
        self.state.request_sort(column);
    }

    pub fn set_order(&mut self, order: Order) {
        self.state.set_order(order);
    }

    pub fn change_page(&mut self, page: usize, total_rows: usize) {
        self.state.change_page(page, total_rows);
    }

    pub fn first_page(&mut self) {
        self.state.reset_page();
    }

    pub fn change_rows_per_page(&mut self, rows_per_page: usize) {
        self.state.change_rows_per_page(rows_per_page);
    }

    pub fn view<'a, I>(&self, rows: I) -> TableView<'a, R>
    where
        R: 'a,
        I: IntoIterator<Item = &'a R>,
    {
        self.state.view(rows)
    }

    pub fn render<'a, I>(&self, rows: I, is_loading: bool) -> String
    where
        R: 'a,
        I: IntoIterator<Item = &'a R>,
    {
        if is_loading {
            return skeleton(SKELETON_LINES);
        }

        let view = self.view(rows);

        let mut columns = Vec::with_capacity(R::HEAD_CELLS.len() + 1);
        if R::NUMBERED {
            columns.push(GridColumn::new("#", Align::Left));
        }
        columns.extend(
            R::HEAD_CELLS
                .iter()
                .map(|cell| GridColumn::new(cell.title(view.order, view.order_by), cell.align())),
        );

        let mut grid = TextGrid::new(columns)
            .with_filler_rows(view.empty_rows)
            .with_empty_message(R::EMPTY_MESSAGE)
            .with_footer(format!(
                "Page {} of {} · {}",
                view.page + 1,
                view.page_count,
                view.range_label()
            ));

        for (index, row) in view.visible_rows.iter().enumerate() {
            let mut cells = Vec::with_capacity(R::HEAD_CELLS.len() + 1);
            if R::NUMBERED {
                cells.push((index + 1).to_string());
            }
            cells.extend(row.cells());
            grid.push_row(cells);
        }

        grid.render()
    }
}
