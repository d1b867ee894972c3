use scraper::{ElementRef, Html};

use crate::macros::select;
use crate::response::Rows;

pub trait ElementRefExt {
    fn inner_text(&self) -> String;

    /// Cell text with every whitespace run (embedded newlines included)
    /// collapsed to a single space.
    fn normalized_text(&self) -> String;
}

impl ElementRefExt for ElementRef<'_> {
    fn inner_text(&self) -> String {
        self.text().fold("".to_owned(), |mut ret, s| {
            ret.push_str(s);
            ret
        })
    }

    fn normalized_text(&self) -> String {
        self.text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn tables(html: &Html) -> Vec<ElementRef> {
    html.select(select!("table")).collect()
}

/// Converts a `<table>` element into rows of display strings.
///
/// The first `<tr>` becomes the header (forced uppercase); every data row is
/// normalized to the header's column count so downstream layout and sorting
/// can index columns safely.
pub fn table_to_rows(table: ElementRef) -> Rows {
    let mut trs = table.select(select!("tr"));
    let header: Vec<String> = match trs.next() {
        Some(tr) => tr
            .select(select!("th, td"))
            .map(|cell| cell.normalized_text().to_uppercase())
            .collect(),
        None => return Vec::new(),
    };
    if header.is_empty() {
        return Vec::new();
    }
    let width = header.len();

    let mut rows = vec![header];
    for tr in trs {
        let mut cells: Vec<String> = tr
            .select(select!("td"))
            .map(|cell| cell.normalized_text())
            .collect();
        if cells.is_empty() {
            continue;
        }
        cells.resize(width, String::new());
        rows.push(cells);
    }
    rows
}

/// Drops a known trailing column (e.g. a "view" link) from every row.
pub fn strip_last_column(rows: &mut Rows) {
    for row in rows.iter_mut() {
        row.pop();
    }
}

/// Plain text of an HTML fragment, e.g. a problem body embedded in JSON.
pub fn fragment_text(fragment: &str) -> String {
    let html = Html::parse_fragment(fragment);
    html.root_element().text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_table(html: &Html) -> ElementRef {
        tables(html).into_iter().next().unwrap()
    }

    #[test]
    fn table_header_is_uppercased() {
        let html = Html::parse_document(
            "<table>\
                <tr><th>Code</th><th>Name</th></tr>\
                <tr><td>a1</td><td>b1</td></tr>\
            </table>",
        );
        let rows = table_to_rows(first_table(&html));
        assert_eq!(rows[0], vec!["CODE", "NAME"]);
        assert_eq!(rows[1], vec!["a1", "b1"]);
    }

    #[test]
    fn rows_match_header_column_count() {
        let html = Html::parse_document(
            "<table>\
                <tr><th>A</th><th>B</th><th>C</th></tr>\
                <tr><td>short</td></tr>\
                <tr><td>x</td><td>y</td><td>z</td><td>overflow</td></tr>\
            </table>",
        );
        let rows = table_to_rows(first_table(&html));
        for row in &rows {
            assert_eq!(row.len(), rows[0].len());
        }
    }

    #[test]
    fn cell_newlines_collapse_to_spaces() {
        let html = Html::parse_document(
            "<table>\
                <tr><th>H</th></tr>\
                <tr><td>multi\nline\n  cell</td></tr>\
            </table>",
        );
        let rows = table_to_rows(first_table(&html));
        assert_eq!(rows[1][0], "multi line cell");
    }

    #[test]
    fn empty_table_yields_no_rows() {
        let html = Html::parse_document("<table></table>");
        assert!(table_to_rows(first_table(&html)).is_empty());
    }

    #[test]
    fn strip_last_column_drops_view_links() {
        let mut rows = vec![
            vec!["A".to_owned(), "B".to_owned(), "VIEW".to_owned()],
            vec!["a1".to_owned(), "b1".to_owned(), "link".to_owned()],
        ];
        strip_last_column(&mut rows);
        assert_eq!(rows, vec![vec!["A", "B"], vec!["a1", "b1"]]);
    }

    #[test]
    fn fragment_text_strips_markup() {
        assert_eq!(
            fragment_text("<p>Find the <b>sum</b> of two numbers.</p>"),
            "Find the sum of two numbers."
        );
    }
}
