use crate::error::{CsvError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use texty_core::SourceRecord;
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A fully loaded input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<SourceRecord>,
}

impl SourceTable {
    pub fn header_names(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }
}

/// Loads the whole file before parsing, so a read failure never leaves a
/// half-processed table behind.
pub fn read_source(path: &Path) -> Result<SourceTable> {
    let data = fs::read(path).map_err(|source| CsvError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "input loaded");
    parse_with_origin(&data, &path.display().to_string())
}

pub fn parse_source(data: &[u8]) -> Result<SourceTable> {
    parse_with_origin(data, "input")
}

fn parse_with_origin(data: &[u8], origin: &str) -> Result<SourceTable> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| normalize_line_endings(header).into_owned())
        .collect();
    if headers.is_empty() {
        return Err(CsvError::MissingHeader(origin.to_string()));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(to_source_record(&headers, &row?));
    }
    debug!(
        origin,
        columns = headers.len(),
        rows = records.len(),
        "input parsed"
    );

    Ok(SourceTable { headers, records })
}

// Short rows leave the trailing columns absent; cells past the last header
// have no name and are dropped.
fn to_source_record(headers: &[String], row: &StringRecord) -> SourceRecord {
    SourceRecord::from_pairs(
        headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.as_str(), normalize_line_endings(value))),
    )
}

// Multi-line cells (street addresses, notes) keep `\n` as their only line
// break, whatever the exporting platform used.
fn normalize_line_endings(value: &str) -> Cow<'_, str> {
    if !value.contains('\r') {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if matches!(chars.peek(), Some('\n')) {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}
