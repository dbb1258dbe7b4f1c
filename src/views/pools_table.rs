use crate::{
    models::{Pool, PoolColumn},
    table::Order,
    utils::format_number_to_money,
};

use super::data_table::{HeadCell, TableRow};

pub const POOL_HEAD_CELLS: [HeadCell<PoolColumn>; 4] = [
    HeadCell {
        id: PoolColumn::Name,
        label: "Pool",
        numeric: false,
    },
    HeadCell {
        id: PoolColumn::Tvl,
        label: "TVL",
        numeric: true,
    },
    HeadCell {
        id: PoolColumn::Volume24h,
        label: "Volume 24H",
        numeric: true,
    },
    HeadCell {
        id: PoolColumn::Fees24h,
        label: "Fees 24H",
        numeric: true,
    },
];

impl TableRow for Pool {
    const HEAD_CELLS: &'static [HeadCell<PoolColumn>] = &POOL_HEAD_CELLS;
    const EMPTY_MESSAGE: &'static str = "No pools found";
    const NUMBERED: bool = true;
    const DEFAULT_ORDER: Order = Order::Desc;

    fn default_order_by() -> PoolColumn {
        PoolColumn::Tvl
    }

    fn cells(&self) -> Vec<String> {
        vec![
            format!("{}  {}", self.name(), self.fee_label()),
            format_number_to_money(self.tvl, Some(2)),
            format_number_to_money(self.volume24h, Some(2)),
            format_number_to_money(self.fees24h, Some(2)),
        ]
    }
}
