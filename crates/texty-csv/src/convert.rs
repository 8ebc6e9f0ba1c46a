use crate::error::{CsvError, Result};
use crate::reader::read_source;
use crate::writer::{render_canonical, render_phone_list};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use texty_core::{extract_phone_list, map_records, ColumnMap, PhoneListReport};
use tracing::{debug, info};

pub use texty_core::DEFAULT_OUTPUT_FILE_NAME;

pub const DEFAULT_PHONE_LIST_FILE_NAME: &str = "phones.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub output: String,
    pub rows: usize,
    pub phones_found: usize,
    pub emails_found: usize,
}

/// Output file placed next to `input`.
pub fn default_output_path(input: &Path, file_name: &str) -> PathBuf {
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Reads `input`, maps every row through `map` and writes the canonical file.
///
/// The output is rendered in memory and written once; any failure before
/// that point leaves `output` untouched.
pub fn convert_file(input: &Path, output: &Path, map: &ColumnMap) -> Result<ConversionReport> {
    let table = read_source(input)?;
    let records = map_records(&table.records, map);
    let data = render_canonical(&records)?;
    write_output(output, &data)?;

    let report = ConversionReport {
        input: input.display().to_string(),
        output: output.display().to_string(),
        rows: records.len(),
        phones_found: records
            .iter()
            .filter(|record| !record.phone_number.is_empty())
            .count(),
        emails_found: records
            .iter()
            .filter(|record| !record.email_address.is_empty())
            .count(),
    };
    info!(
        input = %report.input,
        output = %report.output,
        rows = report.rows,
        "conversion complete"
    );
    Ok(report)
}

pub fn extract_phone_list_file(input: &Path, output: &Path) -> Result<PhoneListReport> {
    let table = read_source(input)?;
    let list = extract_phone_list(table.header_names(), &table.records);
    let data = render_phone_list(&list.phones)?;
    write_output(output, &data)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        written = list.report.written,
        invalid = list.report.invalid,
        duplicates = list.report.duplicates,
        "phone list written"
    );
    Ok(list.report)
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CsvError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, data).map_err(|source| CsvError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "output written");
    Ok(())
}
