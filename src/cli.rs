//! Command line surface of the `poolscope` binary.
//!
//! Table flags replay what a user would do on the dashboard: pick a page
//! size, click column headers, then move to a page.

use std::{path::Path, str::FromStr};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use crate::{
    config::Settings,
    data::Snapshot,
    models::{Event, EventTopic},
    network::{query_network, Network},
    table::Order,
    views::{DataTable, PoolPage, PoolsPage, TableRow, TokenPage, TokensPage, TransactionsTable},
};

#[derive(Parser, Debug)]
#[command(
    name = "poolscope",
    version,
    about = "Liquidity pool and token analytics from indexer snapshots"
)]
pub struct Cli {
    /// Settings file name without extension
    #[arg(long, default_value = "config")]
    pub config: String,

    /// Network to display (mainnet or testnet)
    #[arg(long)]
    pub network: Option<String>,

    #[command(flatten)]
    pub table: TableArgs,

    #[command(subcommand)]
    pub view: View,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Column header to click; repeat to click again
    #[arg(long = "sort", value_name = "COLUMN")]
    pub sort: Vec<String>,

    /// Direction of the sorted column (asc or desc)
    #[arg(long, value_name = "DIRECTION")]
    pub order: Option<Order>,

    /// Page to show, starting at 1
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long)]
    pub rows: Option<usize>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum View {
    /// All tokens by TVL
    Tokens,
    /// All pools by TVL
    Pools,
    /// One token and the pools trading it
    Token { contract: String },
    /// One pool and its transactions
    Pool {
        address: String,
        /// Transaction filter: all, swap, add or remove
        #[arg(long, default_value = "all")]
        topic: String,
    },
    /// Latest transactions across all pools
    Transactions {
        #[arg(long, default_value = "all")]
        topic: String,
    },
}

impl Cli {
    /// Loads the snapshot for the selected network and renders the view.
    pub fn run(&self, settings: &Settings) -> Result<String> {
        let network = resolve_network(self.network.as_deref(), settings.data.default_network);

        let snapshot = Snapshot::load(Path::new(&settings.data.snapshot_dir), network)
            .context("Failed to load indexer snapshot")?;

        self.render(settings, network, &snapshot)
    }

    pub fn render(
        &self,
        settings: &Settings,
        network: Network,
        snapshot: &Snapshot,
    ) -> Result<String> {
        let per_page = settings.display.items_per_page;
        let tx_per_page = settings.display.transactions_per_page;

        match &self.view {
            View::Tokens => {
                let mut page = TokensPage::new(network, per_page);
                apply_table_args(&mut page.table, &self.table, snapshot.tokens.len())?;
                let loading = show_skeleton(settings, snapshot.tokens.is_empty());
                Ok(page.render(&snapshot.tokens, loading))
            }
            View::Pools => {
                let mut page = PoolsPage::new(network, per_page);
                apply_table_args(&mut page.table, &self.table, snapshot.pools.len())?;
                let loading = show_skeleton(settings, snapshot.pools.is_empty());
                Ok(page.render(&snapshot.pools, loading))
            }
            View::Token { contract } => {
                let token = snapshot
                    .token(contract)
                    .with_context(|| format!("Token {} not found on {}", contract, network))?;
                let pools = snapshot.pools_for_token(contract);

                let mut page = TokenPage::new(network, per_page);
                apply_table_args(&mut page.pools, &self.table, pools.len())?;
                Ok(page.render(token, &pools))
            }
            View::Pool { address, topic } => {
                let pool = snapshot
                    .pool(address)
                    .with_context(|| format!("Pool {} not found on {}", address, network))?;
                let events = snapshot.events_for_pool(address);
                info!("Pool {} has {} events", pool.name(), events.len());

                let mut page = PoolPage::new(network, tx_per_page);
                apply_topic(&mut page.transactions, topic, &events, &self.table)?;
                let loading = show_skeleton(settings, events.is_empty());
                Ok(page.render(Some(pool), &events, loading))
            }
            View::Transactions { topic } => {
                let mut table = TransactionsTable::new(tx_per_page);
                apply_topic(&mut table, topic, &snapshot.events, &self.table)?;
                let loading = show_skeleton(settings, snapshot.events.is_empty());
                Ok(table.render(&snapshot.events, loading))
            }
        }
    }
}

/// Same rules as the `network` query parameter; an absent flag uses the
/// configured default.
pub fn resolve_network(query: Option<&str>, default: Network) -> Network {
    let Some(value) = query else {
        return default;
    };

    let resolved = query_network(query, true);
    if !resolved.is_valid_query {
        warn!("Invalid network '{}', falling back to {}", value, Network::Mainnet);
    }
    resolved.network.unwrap_or_default()
}

/// Replays the table flags in UI order: page size, header clicks, direction,
/// then the page change. `--page` is 1-based; 0 is read as the first page.
pub fn apply_table_args<R>(
    table: &mut DataTable<R>,
    args: &TableArgs,
    total_rows: usize,
) -> Result<()>
where
    R: TableRow,
    R::Column: FromStr,
    <R::Column as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    if let Some(rows_per_page) = args.rows {
        table.change_rows_per_page(rows_per_page);
    }

    for column in &args.sort {
        let column: R::Column = column.parse()?;
        table.request_sort(column);
    }

    if let Some(order) = args.order {
        table.set_order(order);
    }

    if let Some(page) = args.page {
        table.change_page(page.saturating_sub(1), total_rows);
    }

    Ok(())
}

fn apply_topic(
    table: &mut TransactionsTable,
    topic: &str,
    events: &[Event],
    args: &TableArgs,
) -> Result<()> {
    table.set_topic(EventTopic::from_str(topic)?);
    let total_rows = table.filtered(events).len();
    apply_table_args(&mut table.table, args, total_rows)
}

/// Missing sections render as a loading placeholder when configured.
fn show_skeleton(settings: &Settings, is_empty: bool) -> bool {
    settings.display.skeleton_on_empty && is_empty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Token, TokenColumn};

    const TESTNET: &str = include_str!("../snapshots/testnet.json");
    const POOL: &str = "CBHCRSVX3ZZ7EGTSYMKPEFGZNWRVCSESQR3UABET4MIW52N4EVU6BIZX";

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("poolscope").chain(args.iter().copied())).unwrap()
    }

    fn snapshot() -> Snapshot {
        Snapshot::from_json(TESTNET).unwrap()
    }

    fn render(args: &[&str], settings: &Settings, snapshot: &Snapshot) -> String {
        parse(args).render(settings, Network::Testnet, snapshot).unwrap()
    }

    #[test]
    fn test_repeated_sort_flips_direction() {
        let mut table = DataTable::<Token>::new(10);
        let cli = parse(&["--sort", "price", "tokens"]);
        apply_table_args(&mut table, &cli.table, 3).unwrap();
        assert_eq!(table.state().order_by(), TokenColumn::Price);
        assert_eq!(table.state().order(), Order::Asc);

        let mut table = DataTable::<Token>::new(10);
        let cli = parse(&["--sort", "price", "--sort", "price", "tokens"]);
        apply_table_args(&mut table, &cli.table, 3).unwrap();
        assert_eq!(table.state().order_by(), TokenColumn::Price);
        assert_eq!(table.state().order(), Order::Desc);
    }

    #[test]
    fn test_order_flag_sets_direction_of_sorted_column() {
        let mut table = DataTable::<Token>::new(10);
        let cli = parse(&["--sort", "name", "--order", "desc", "tokens"]);
        apply_table_args(&mut table, &cli.table, 3).unwrap();
        assert_eq!(table.state().order_by(), TokenColumn::Asset);
        assert_eq!(table.state().order(), Order::Desc);

        let rejected = Cli::try_parse_from(["poolscope", "--order", "sideways", "tokens"]);
        assert!(rejected.is_err());
    }

    #[test]
    fn test_page_flag_is_one_based() {
        let mut table = DataTable::<Token>::new(10);
        let cli = parse(&["--rows", "1", "--page", "2", "tokens"]);
        apply_table_args(&mut table, &cli.table, 3).unwrap();
        assert_eq!(table.state().rows_per_page(), 1);
        assert_eq!(table.state().page(), 1);

        let mut table = DataTable::<Token>::new(1);
        let cli = parse(&["--page", "0", "tokens"]);
        apply_table_args(&mut table, &cli.table, 3).unwrap();
        assert_eq!(table.state().page(), 0);

        let mut table = DataTable::<Token>::new(1);
        let cli = parse(&["--page", "99", "tokens"]);
        apply_table_args(&mut table, &cli.table, 3).unwrap();
        assert_eq!(table.state().page(), 2);
    }

    #[test]
    fn test_unknown_sort_column_is_an_error() {
        let mut table = DataTable::<Token>::new(10);
        let cli = parse(&["--sort", "marketcap", "tokens"]);
        assert!(apply_table_args(&mut table, &cli.table, 3).is_err());
    }

    #[test]
    fn test_network_flag_resolution() {
        assert_eq!(resolve_network(None, Network::Testnet), Network::Testnet);
        assert_eq!(resolve_network(Some("testnet"), Network::Mainnet), Network::Testnet);
        assert_eq!(resolve_network(Some("mainnet"), Network::Testnet), Network::Mainnet);
        assert_eq!(resolve_network(Some("TESTNET"), Network::Testnet), Network::Mainnet);
        assert_eq!(resolve_network(Some("devnet"), Network::Testnet), Network::Mainnet);
    }

    #[test]
    fn test_tokens_view_pages_through_snapshot() {
        let args = ["--rows", "2", "--page", "2", "tokens"];
        let rendered = render(&args, &Settings::default(), &snapshot());
        assert!(rendered.contains("CAS3J7GYLGXMF6TDJBBYYSE3HQ6BBSMLNUQ34T6TZMYMW2EVH34XOWMA"));
        assert!(!rendered.contains("Stellar Lumens"));
        assert!(rendered.ends_with("Page 2 of 2 · 3–3 of 3"));
    }

    #[test]
    fn test_skeleton_on_empty() {
        let empty = Snapshot::default();

        let plain = render(&["tokens"], &Settings::default(), &empty);
        assert!(plain.contains("No tokens found"));

        let mut settings = Settings::default();
        settings.display.skeleton_on_empty = true;

        let loading = render(&["tokens"], &settings, &empty);
        assert!(loading.contains('░'));
        assert!(!loading.contains("No tokens found"));

        let filled = render(&["tokens"], &settings, &snapshot());
        assert!(!filled.contains('░'));
        assert!(filled.contains("XLM"));
    }

    #[test]
    fn test_pool_view_applies_topic() {
        let args = ["pool", POOL, "--topic", "swap"];
        let rendered = render(&args, &Settings::default(), &snapshot());
        assert!(rendered.contains("All [Swaps] Adds Removes"));
        assert!(rendered.contains("Swap XLM for USDC"));
        assert!(!rendered.contains("Add XLM and USDC"));
    }

    #[test]
    fn test_unknown_pool_or_topic_is_an_error() {
        let settings = Settings::default();
        let snapshot = snapshot();

        assert!(parse(&["pool", "CNOPE"]).render(&settings, Network::Testnet, &snapshot).is_err());
        assert!(parse(&["transactions", "--topic", "mint"])
            .render(&settings, Network::Testnet, &snapshot)
            .is_err());
    }

    #[test]
    fn test_shipped_settings_find_a_snapshot_for_every_network() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let settings = Settings::from_file(&root.join("config").to_string_lossy()).unwrap();
        let dir = root.join(&settings.data.snapshot_dir);

        let default = Snapshot::load(&dir, settings.data.default_network).unwrap();
        assert!(!default.tokens.is_empty());

        for network in [Network::Mainnet, Network::Testnet] {
            let snapshot = Snapshot::load(&dir, network).unwrap();
            assert!(!snapshot.pools.is_empty());
        }
    }
}
