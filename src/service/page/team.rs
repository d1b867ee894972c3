use scraper::Html;

use crate::macros::select;
use crate::response::Rows;
use crate::service::scrape::{table_to_rows, tables, ElementRefExt as _};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPage {
    pub details: String,
    pub members: Option<Rows>,
}

/// Team pages are laid out as tables: the second holds the heading, the
/// third the detail rows, the fourth the solved-problems listing.
pub fn team_page(html: &Html) -> Option<TeamPage> {
    let tables = tables(html);
    let heading = tables.get(1)?.normalized_text();
    let detail_table = tables.get(2)?;

    let mut lines = Vec::new();
    for tr in detail_table.select(select!("tr")) {
        let cells: Vec<String> = tr
            .select(select!("td"))
            .map(|td| td.normalized_text())
            .collect();
        if cells.len() < 2 {
            continue;
        }
        let line = cells.join(" ");
        if line.starts_with("Information for") {
            lines.push(String::new());
        }
        lines.push(line);
    }

    let details = format!(
        "\n{}\n\n{}\n\nProblems Successfully Solved:",
        heading,
        lines.join("\n")
    );
    let members = tables.get(3).map(|table| table_to_rows(*table));
    Some(TeamPage { details, members })
}
