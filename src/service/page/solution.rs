use scraper::Html;

use crate::macros::select;
use crate::response::Rows;
use crate::service::scrape::{table_to_rows, ElementRefExt as _};

/// Unknown solution ids render an inline error box instead of a 404 status.
pub fn is_invalid(html: &Html) -> bool {
    html.select(select!("div.err-message")).next().is_some()
}

pub fn source_text(html: &Html) -> Option<String> {
    html.select(select!("pre"))
        .next()
        .map(|pre| pre.inner_text())
}

pub fn status_table(html: &Html) -> Option<Rows> {
    let rows = html
        .select(select!("table.status-table"))
        .next()
        .map(table_to_rows)?;
    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}
