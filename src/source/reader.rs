//! Delimited text reader
//!
//! Reads header-keyed rows from CSV-like text: quoted fields, doubled quotes,
//! delimiters and line breaks inside quotes, CRLF endings and a UTF-8 BOM.
//! Lines that are entirely blank are skipped.

use tracing::debug;

use crate::core::RawRow;

/// Split source text into header-keyed rows
pub fn read_rows(text: &str, delimiter: char) -> Vec<RawRow> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text, delimiter).into_iter();

    let Some(header) = records.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header.cells.into_iter().map(|h| h.trim().to_string()).collect();

    let mut rows = Vec::new();
    for record in records {
        let mut row = RawRow::new(rows.len() + 1, record.line);
        row.open_quote = record.open_quote;
        if record.cells.len() > header.len() {
            debug!(
                line = record.line,
                expected = header.len(),
                found = record.cells.len(),
                "ignoring cells beyond the header"
            );
        }
        for (key, cell) in header.iter().zip(record.cells) {
            row.fields.insert(key.clone(), cell);
        }
        rows.push(row);
    }
    rows
}

struct Record {
    /// Line where the record starts
    line: usize,
    cells: Vec<String>,
    /// A quoted cell was still open at the end of the text
    open_quote: bool,
}

/// Split text into records of cells.
///
/// A quote opens a quoted section only as the first character of a cell;
/// anywhere else it is kept as a literal character.
fn split_records(text: &str, delimiter: char) -> Vec<Record> {
    let mut records = Vec::new();
    let mut cells: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    cell.push(c);
                }
                _ => cell.push(c),
            }
            continue;
        }

        match c {
            '"' if cell.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            c if c == delimiter => {
                cells.push(std::mem::take(&mut cell));
                quoted = false;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                cells.push(std::mem::take(&mut cell));
                quoted = false;
                push_record(&mut records, record_line, std::mem::take(&mut cells), false);
                line += 1;
                record_line = line;
            }
            _ => cell.push(c),
        }
    }

    if in_quotes || !cell.is_empty() || !cells.is_empty() {
        cells.push(cell);
        push_record(&mut records, record_line, cells, in_quotes);
    }

    records
}

fn push_record(records: &mut Vec<Record>, line: usize, cells: Vec<String>, open_quote: bool) {
    if !open_quote && cells.iter().all(|c| c.trim().is_empty()) {
        return;
    }
    records.push(Record {
        line,
        cells,
        open_quote,
    });
}
