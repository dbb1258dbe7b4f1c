//! Pool detail page.

use crate::{
    models::{Event, Pool},
    network::Network,
    utils::{format_number_to_money, format_number_to_token, format_token_amount},
};

use super::{
    layout::{loading_or, page_header, section_title},
    transactions_table::TransactionsTable,
};

/// Everything the pool page shows for one pool address.
#[derive(Debug, Clone)]
pub struct PoolPage {
    pub network: Network,
    pub transactions: TransactionsTable,
}

impl PoolPage {
    pub fn new(network: Network, transactions_per_page: usize) -> Self {
        Self {
            network,
            transactions: TransactionsTable::new(transactions_per_page),
        }
    }

    /// `1 XLM = 0.25 USDC` chips for both directions.
    pub fn rate_chips(pool: &Pool) -> (String, String) {
        let code0 = pool.token0.display_code();
        let code1 = pool.token1.display_code();
        (
            format!(
                "1 {} = {} {}",
                code0,
                format_number_to_token(Some(pool.token0_price())),
                code1
            ),
            format!(
                "1 {} = {} {}",
                code1,
                format_number_to_token(Some(pool.token1_price())),
                code0
            ),
        )
    }

    /// Render the page. `pool` is `None` while loading.
    pub fn render(&self, pool: Option<&Pool>, events: &[Event], events_loading: bool) -> String {
        let is_loading = pool.is_none();
        let name = pool.map(Pool::name).unwrap_or_else(|| String::from("/"));

        let mut sections = vec![page_header(&["Home", "Pools", &name], self.network)];

        let fee = pool.map(Pool::fee_label).unwrap_or_default();
        sections.push(format!("{}  {}", name, fee).trim_end().to_string());

        let (chip0, chip1) = loading_pair(pool.map(Self::rate_chips));
        sections.push(format!("{}  |  {}", chip0, chip1));

        sections.push(String::new());
        sections.push(section_title("Total tokens locked"));
        for (code, reserve, decimals) in locked_tokens(pool) {
            sections.push(format!(
                "{:<12}{}",
                code,
                loading_or(is_loading, || format_token_amount(reserve.as_deref(), decimals))
            ));
        }

        sections.push(String::new());
        let money = |value| format_number_to_money(value, None);
        // Fees are reported in pool token units, not USD
        let stats: [(&str, Option<f64>, &dyn Fn(Option<f64>) -> String); 3] = [
            ("TVL", pool.and_then(|p| p.tvl), &money),
            ("Volume 24h", pool.and_then(|p| p.volume24h), &money),
            ("24h Fees", pool.and_then(|p| p.fees24h), &format_number_to_token),
        ];
        for (label, value, formatter) in stats {
            sections.push(format!(
                "{:<12}{}",
                label,
                loading_or(is_loading, || formatter(value))
            ));
        }

        sections.push(String::new());
        sections.push(section_title("Transactions"));
        sections.push(self.transactions.render(events, events_loading));

        sections.join("\n")
    }
}

fn loading_pair(pair: Option<(String, String)>) -> (String, String) {
    match pair {
        Some(pair) => pair,
        None => (loading_or(true, String::new), loading_or(true, String::new)),
    }
}

/// (code, raw reserve, decimals) per side of the pool.
fn locked_tokens(pool: Option<&Pool>) -> Vec<(String, Option<String>, Option<u8>)> {
    match pool {
        Some(pool) => vec![
            (
                pool.token0.display_code(),
                pool.reserve0.clone(),
                Some(pool.token0.decimals),
            ),
            (
                pool.token1.display_code(),
                pool.reserve1.clone(),
                Some(pool.token1.decimals),
            ),
        ],
        None => vec![(String::new(), None, None), (String::new(), None, None)],
    }
}
