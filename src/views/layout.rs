//! Page chrome: breadcrumbs, section titles and loading placeholders.

use crate::network::Network;

/// Placeholder glyphs shown while data loads.
const SKELETON_CELL: &str = "░░░░░░░░░░░░";

/// Trail of page names, e.g. `Home / Pools / XLM/USDC`.
pub fn breadcrumbs(labels: &[&str]) -> String {
    labels.join(" / ")
}

/// Top bar of every page: breadcrumbs plus the active network.
pub fn page_header(labels: &[&str], network: Network) -> String {
    format!("{}  [{}]", breadcrumbs(labels), network)
}

pub fn section_title(title: &str) -> String {
    format!("{}\n{}", title, "=".repeat(title.chars().count()))
}

/// A block of `lines` placeholder rows.
pub fn skeleton(lines: usize) -> String {
    vec![SKELETON_CELL; lines.max(1)].join("\n")
}

/// `value`, or an inline placeholder while loading.
pub fn loading_or(is_loading: bool, value: impl FnOnce() -> String) -> String {
    if is_loading {
        SKELETON_CELL.to_string()
    } else {
        value()
    }
}
