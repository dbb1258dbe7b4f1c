use crate::{
    models::{Event, EventColumn, EventTopic},
    table::Order,
    utils::{format_number_to_token, shorten_address},
};

use super::data_table::{DataTable, HeadCell, TableRow};

pub const EVENT_HEAD_CELLS: [HeadCell<EventColumn>; 5] = [
    HeadCell {
        id: EventColumn::Type,
        label: "Type",
        numeric: false,
    },
    HeadCell {
        id: EventColumn::Amount0,
        label: "Token Amount",
        numeric: true,
    },
    HeadCell {
        id: EventColumn::Amount1,
        label: "Token Amount",
        numeric: true,
    },
    HeadCell {
        id: EventColumn::Account,
        label: "Account",
        numeric: false,
    },
    HeadCell {
        id: EventColumn::Time,
        label: "Time",
        numeric: false,
    },
];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

impl TableRow for Event {
    const HEAD_CELLS: &'static [HeadCell<EventColumn>] = &EVENT_HEAD_CELLS;
    const EMPTY_MESSAGE: &'static str = "No transactions found";
    const NUMBERED: bool = false;
    const DEFAULT_ORDER: Order = Order::Desc;

    fn default_order_by() -> EventColumn {
        EventColumn::Time
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.description(),
            format!(
                "{} {}",
                format_number_to_token(self.amount0_adjusted()),
                self.token0.display_code()
            ),
            format!(
                "{} {}",
                format_number_to_token(self.amount1_adjusted()),
                self.token1.display_code()
            ),
            self.account
                .as_deref()
                .map(shorten_address)
                .unwrap_or_else(|| String::from("-")),
            self.timestamp.format(TIME_FORMAT).to_string(),
        ]
    }
}

/// Transactions table with its topic filter row.
#[derive(Debug, Clone)]
pub struct TransactionsTable {
    pub table: DataTable<Event>,
    pub topic: EventTopic,
}

impl TransactionsTable {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            table: DataTable::new(items_per_page),
            topic: EventTopic::default(),
        }
    }

    /// Switching the filter changes the row set, so paging restarts.
    pub fn set_topic(&mut self, topic: EventTopic) {
        if self.topic != topic {
            self.topic = topic;
            self.table.first_page();
        }
    }

    /// Events passing the current filter, in input order.
    pub fn filtered<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        events.iter().filter(|e| self.topic.matches(e)).collect()
    }

    /// Filter row, e.g. `[All] Swaps Adds Removes`.
    pub fn filter_bar(&self) -> String {
        EventTopic::ALL
            .iter()
            .map(|topic| {
                if *topic == self.topic {
                    format!("[{}]", topic.label())
                } else {
                    topic.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render(&self, events: &[Event], is_loading: bool) -> String {
        let rows = self.filtered(events);
        format!("{}\n{}", self.filter_bar(), self.table.render(rows, is_loading))
    }
}
