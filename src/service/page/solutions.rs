use scraper::Html;

use crate::macros::select;
use crate::response::Rows;
use crate::service::scrape::{strip_last_column, table_to_rows, tables, ElementRefExt as _};

/// Resolves a language name to the `language` query-parameter value via the
/// `#language` filter dropdown of the status page.
pub fn language_param(html: &Html, language: &str) -> Option<String> {
    html.select(select!("select#language option")).find_map(|option| {
        if option.normalized_text().eq_ignore_ascii_case(language) {
            option.value().attr("value").map(str::to_owned)
        } else {
            None
        }
    })
}

/// The submissions listing is the third table on the page; its trailing
/// "view solution" column is dropped.
pub fn solutions_table(html: &Html) -> Option<Rows> {
    let table = tables(html).into_iter().nth(2)?;
    let mut rows = table_to_rows(table);
    if rows.is_empty() {
        return None;
    }
    strip_last_column(&mut rows);
    Some(rows)
}

pub fn page_info(html: &Html) -> Option<String> {
    html.select(select!("div.pageinfo"))
        .next()
        .map(|div| div.normalized_text())
}
