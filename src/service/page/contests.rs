use scraper::Html;

use crate::response::ResponseRecord;
use crate::service::scrape::{table_to_rows, tables};

/// Emits one label + table record pair per requested section. The first
/// table on the page is layout chrome; contest listings start at index 1.
pub fn contest_records(html: &Html, labels: &[&str]) -> Vec<ResponseRecord> {
    let tables = tables(html);
    let mut records = Vec::new();
    for (idx, label) in labels.iter().enumerate() {
        let rows = tables.get(idx + 1).map(|table| table_to_rows(*table));
        match rows {
            Some(rows) if !rows.is_empty() => {
                records.push(ResponseRecord::text(format!("{} Contests:", label)));
                records.push(ResponseRecord::table(rows));
            }
            _ => records.push(ResponseRecord::not_found(format!(
                "{} contests not found.",
                label
            ))),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseData;

    fn contests_html() -> Html {
        Html::parse_document(
            "<table></table>\
            <table>\
                <tr><th>Code</th><th>Name</th></tr>\
                <tr><td>c1</td><td>Now</td></tr>\
            </table>\
            <table>\
                <tr><th>Code</th><th>Name</th></tr>\
                <tr><td>c2</td><td>Soon</td></tr>\
            </table>",
        )
    }

    #[test]
    fn present_and_future_pairs() {
        let records = contest_records(&contests_html(), &["Present", "Future"]);
        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0].data,
            Some(ResponseData::Text("Present Contests:".to_owned()))
        );
        match &records[1].data {
            Some(ResponseData::Table(rows)) => assert_eq!(rows[1], vec!["c1", "Now"]),
            other => panic!("expected table, got {:?}", other),
        }
        assert_eq!(
            records[2].data,
            Some(ResponseData::Text("Future Contests:".to_owned()))
        );
        match &records[3].data {
            Some(ResponseData::Table(rows)) => assert_eq!(rows[1], vec!["c2", "Soon"]),
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn past_pair_only() {
        let records = contest_records(&contests_html(), &["Past"]);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].data,
            Some(ResponseData::Text("Past Contests:".to_owned()))
        );
    }

    #[test]
    fn missing_table_reports_not_found() {
        let html = Html::parse_document("<table></table>");
        let records = contest_records(&html, &["Present", "Future"]);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|record| record.code == 404));
    }
}
