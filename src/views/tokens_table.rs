use crate::{
    models::{Token, TokenColumn},
    table::Order,
    utils::format_number_to_money,
};

use super::data_table::{HeadCell, TableRow};

pub const TOKEN_HEAD_CELLS: [HeadCell<TokenColumn>; 4] = [
    HeadCell {
        id: TokenColumn::Asset,
        label: "Name",
        numeric: false,
    },
    HeadCell {
        id: TokenColumn::Price,
        label: "Price",
        numeric: true,
    },
    HeadCell {
        id: TokenColumn::Volume24h,
        label: "Volume 24H",
        numeric: true,
    },
    HeadCell {
        id: TokenColumn::Tvl,
        label: "TVL",
        numeric: true,
    },
];

impl TableRow for Token {
    const HEAD_CELLS: &'static [HeadCell<TokenColumn>] = &TOKEN_HEAD_CELLS;
    const EMPTY_MESSAGE: &'static str = "No tokens found";
    const NUMBERED: bool = true;
    const DEFAULT_ORDER: Order = Order::Desc;

    fn default_order_by() -> TokenColumn {
        TokenColumn::Tvl
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.asset.display_name().to_string(),
            format_number_to_money(self.price, None),
            format_number_to_money(self.volume24h, None),
            format_number_to_money(self.tvl, Some(2)),
        ]
    }
}
