//! Listing pages and the token detail page.

use crate::{
    models::{Pool, Token},
    network::Network,
    utils::format_number_to_money,
};

use super::{
    data_table::DataTable,
    layout::{page_header, section_title},
};

/// `Home / Tokens` listing.
#[derive(Debug, Clone)]
pub struct TokensPage {
    pub network: Network,
    pub table: DataTable<Token>,
}

impl TokensPage {
    pub fn new(network: Network, items_per_page: usize) -> Self {
        Self {
            network,
            table: DataTable::new(items_per_page),
        }
    }

    pub fn render(&self, tokens: &[Token], is_loading: bool) -> String {
        [
            page_header(&["Home", "Tokens"], self.network),
            section_title("All Tokens"),
            self.table.render(tokens, is_loading),
        ]
        .join("\n")
    }
}

/// `Home / Pools` listing.
#[derive(Debug, Clone)]
pub struct PoolsPage {
    pub network: Network,
    pub table: DataTable<Pool>,
}

impl PoolsPage {
    pub fn new(network: Network, items_per_page: usize) -> Self {
        Self {
            network,
            table: DataTable::new(items_per_page),
        }
    }

    pub fn render(&self, pools: &[Pool], is_loading: bool) -> String {
        [
            page_header(&["Home", "Pools"], self.network),
            section_title("All Pools"),
            self.table.render(pools, is_loading),
        ]
        .join("\n")
    }
}

/// `Home / Tokens / CODE`: token stats and the pools trading it.
#[derive(Debug, Clone)]
pub struct TokenPage {
    pub network: Network,
    pub pools: DataTable<Pool>,
}

impl TokenPage {
    pub fn new(network: Network, items_per_page: usize) -> Self {
        Self {
            network,
            pools: DataTable::new(items_per_page),
        }
    }

    pub fn render(&self, token: &Token, pools: &[Pool]) -> String {
        let code = token.asset.display_code();
        let mut sections = vec![
            page_header(&["Home", "Tokens", &code], self.network),
            format!("{} ({})", token.asset.display_name(), code),
            String::new(),
        ];

        let stats = [
            ("Price", format_number_to_money(token.price, None)),
            ("TVL", format_number_to_money(token.tvl, Some(2))),
            ("Volume 24h", format_number_to_money(token.volume24h, None)),
        ];
        for (label, value) in stats {
            sections.push(format!("{:<12}{}", label, value));
        }

        sections.push(String::new());
        sections.push(section_title("Pools"));
        sections.push(self.pools.render(pools, false));
        sections.join("\n")
    }
}
