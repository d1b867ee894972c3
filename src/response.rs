use std::cmp::Ordering;
use std::io::Write;

use console::Style;

use crate::model::SortOrder;
use crate::Result;

pub static SERVER_DOWN_MSG: &str = "Please try again later. Seems like CodeChef server is down!";
pub static UNAUTHORIZED_MSG: &str = "You are not logged in.";
pub static NOTHING_TO_SHOW_MSG: &str = "Nothing to show.";

static MIN_COLUMN_GAP: usize = 3;

pub type Rows = Vec<Vec<String>>;

/// Payload of a single normalized response unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseData {
    Text(String),
    Table(Rows),
}

/// Normalized unit of output shared by every operation.
///
/// `code` is an HTTP-like status used purely for severity selection when
/// rendering; `extra` is a trailing supplementary line (pagination info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    pub data: Option<ResponseData>,
    pub code: u16,
    pub extra: Option<String>,
}

impl ResponseRecord {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            data: Some(ResponseData::Text(text.into())),
            code: 200,
            extra: None,
        }
    }

    pub fn table(rows: Rows) -> Self {
        Self {
            data: Some(ResponseData::Table(rows)),
            code: 200,
            extra: None,
        }
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    pub fn client_error(text: impl Into<String>) -> Self {
        Self::text(text).with_code(400)
    }

    pub fn not_found(text: impl Into<String>) -> Self {
        Self::text(text).with_code(404)
    }

    pub fn unauthorized() -> Self {
        Self {
            data: None,
            code: 401,
            extra: None,
        }
    }

    pub fn server_down() -> Self {
        Self {
            data: None,
            code: 503,
            extra: None,
        }
    }
}

/// Color bucket derived from a record's code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Warning,
    Failure,
}

impl Severity {
    pub fn from_code(code: u16) -> Self {
        match code {
            503 | 401 => Self::Failure,
            400 | 404 => Self::Warning,
            _ => Self::Normal,
        }
    }

    pub fn style(self) -> Style {
        match self {
            Self::Failure => Style::new().red(),
            Self::Warning => Style::new().yellow(),
            Self::Normal => Style::new(),
        }
    }
}

/// Renders records in order. Codes 503 and 401 substitute their fixed
/// messages when a record carries no data of its own.
pub fn render(records: &[ResponseRecord], out: &mut dyn Write) -> Result<()> {
    for record in records {
        render_record(record, out)?;
    }
    Ok(())
}

fn render_record(record: &ResponseRecord, out: &mut dyn Write) -> Result<()> {
    let style = Severity::from_code(record.code).style();

    let default_text = match record.code {
        503 => Some(SERVER_DOWN_MSG),
        401 => Some(UNAUTHORIZED_MSG),
        _ => None,
    };
    let data = match (&record.data, default_text) {
        (Some(data), _) => Some(data.clone()),
        (None, Some(text)) => Some(ResponseData::Text(text.to_owned())),
        (None, None) => None,
    };

    match &data {
        None if record.extra.is_none() => {
            let warn = Severity::Warning.style();
            writeln!(out, "{}", warn.apply_to(NOTHING_TO_SHOW_MSG))?;
        }
        None => {}
        Some(ResponseData::Text(text)) => writeln!(out, "{}", style.apply_to(text))?,
        Some(ResponseData::Table(rows)) => {
            if !rows.is_empty() {
                writeln!(out, "{}", format_table(rows))?;
            }
        }
    }
    if let Some(extra) = &record.extra {
        writeln!(out, "{}", style.apply_to(extra))?;
    }
    Ok(())
}

/// Fixed-width layout with a minimum 3-space gutter between columns.
pub fn format_table(rows: &Rows) -> String {
    let num_cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; num_cols];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            line.push_str(cell);
            let pad = widths[i] - cell.chars().count() + MIN_COLUMN_GAP;
            line.extend(std::iter::repeat(' ').take(pad));
        }
        lines.push(line.trim_end().to_owned());
    }
    lines.join("\n")
}

/// Sorts every tabular record by the column whose header matches `key`
/// (case-insensitively), leaving the header row in place. Cells that both
/// parse as integers compare numerically, everything else as strings.
pub fn sort_tables(records: &mut [ResponseRecord], key: &str, order: SortOrder) {
    for record in records {
        if let Some(ResponseData::Table(rows)) = record.data.as_mut() {
            sort_rows(rows, key, order);
        }
    }
}

fn sort_rows(rows: &mut Rows, key: &str, order: SortOrder) {
    let col = match rows
        .first()
        .and_then(|header| header.iter().position(|h| h.eq_ignore_ascii_case(key)))
    {
        Some(col) => col,
        None => return,
    };
    if let Some((_, data_rows)) = rows.split_first_mut() {
        data_rows.sort_by(|a, b| {
            let ord = compare_cells(&a[col], &b[col]);
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}
