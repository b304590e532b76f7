//! Delimited-row plumbing for the two backing files.
//!
//! Both files are plain comma-delimited text with a fixed column order and a
//! header row. A field value containing the delimiter, a quote, or a line
//! break is written quoted with embedded quotes doubled, and unquoted again on
//! read, so every valid field value round-trips through save and reload.
//! Trimming and upper-casing remain the calling layer's convention, not
//! enforced here.

use std::fs;
use std::io;
use std::path::Path;

pub const DELIMITER: char = ',';

/// Column order of the programs file.
pub const PROGRAM_FIELD_NAMES: [&str; 2] = ["code", "name"];

/// Column order of the students file.
pub const STUDENT_FIELD_NAMES: [&str; 8] = [
    "id",
    "surname",
    "firstname",
    "middlename",
    "suffix",
    "year",
    "gender",
    "program_code",
];

/// Join field names into a header row.
pub fn header(field_names: &[&str]) -> String {
    encode_row(field_names)
}

fn needs_quoting(value: &str) -> bool {
    value.contains([DELIMITER, '"', '\n', '\r'])
}

/// Join one record's column values into a data row, quoting any value that
/// contains the delimiter, a quote, or a line break.
pub fn encode_row(values: &[&str]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if needs_quoting(value) {
            out.push('"');
            out.push_str(&value.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(value);
        }
    }
    out
}

/// Split full file contents into records with their 1-based starting line
/// numbers.
///
/// A record normally ends at a line break; a line break inside a quoted field
/// belongs to the field.
pub fn split_records(contents: &str) -> Vec<(usize, &str)> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut line = 1;
    let mut start_line = 1;

    for (i, c) in contents.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                let end = if contents.as_bytes()[..i].ends_with(b"\r") {
                    i - 1
                } else {
                    i
                };
                records.push((start_line, &contents[start..end]));
                start = i + 1;
                line += 1;
                start_line = line;
            }
            '\n' => line += 1,
            _ => {}
        }
    }

    if start < contents.len() {
        records.push((start_line, &contents[start..]));
    }

    records
}

/// Split one record into exactly `expected` columns, unquoting quoted fields.
///
/// Returns `None` on a column-count mismatch or an unterminated quote; the
/// store turns that into a malformed-row error carrying file and line context.
pub fn split_row(record: &str, expected: usize) -> Option<Vec<String>> {
    let mut cols = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == DELIMITER {
            cols.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }

    if in_quotes {
        return None;
    }
    cols.push(field);

    (cols.len() == expected).then_some(cols)
}

/// Create a backing file containing only the header row.
pub fn create_with_header(path: &Path, field_names: &[&str]) -> io::Result<()> {
    fs::write(path, format!("{}\n", header(field_names)))
}
