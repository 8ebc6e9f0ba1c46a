//! Phone-only export: one deduplicated, dash-formatted number per contact.
//!
//! This is a separate pipeline from the canonical twelve-column mapping and
//! is never applied implicitly.

use crate::domain::phone::format_phone_dashed;
use crate::domain::record::SourceRecord;
use serde::Serialize;
use std::collections::HashSet;

pub const PHONE_LIST_HEADER: &str = "Phone";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhoneListReport {
    pub rows_read: usize,
    pub written: usize,
    pub invalid: usize,
    pub duplicates: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneList {
    pub phones: Vec<String>,
    pub report: PhoneListReport,
}

/// Positions of headers that look like phone columns, in header order.
/// Repeated headers are kept apart by position.
pub fn phone_columns<'a, I>(headers: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .enumerate()
        .filter(|(_, header)| header.to_lowercase().contains("phone"))
        .map(|(index, _)| index)
        .collect()
}

pub fn first_valid_phone(record: &SourceRecord, columns: &[usize]) -> Option<String> {
    columns
        .iter()
        .filter_map(|index| record.cell(*index))
        .find_map(format_phone_dashed)
}

pub fn extract_phone_list<'a, I>(headers: I, records: &[SourceRecord]) -> PhoneList
where
    I: IntoIterator<Item = &'a str>,
{
    let columns = phone_columns(headers);
    let mut seen = HashSet::new();
    let mut phones = Vec::new();
    let mut report = PhoneListReport {
        rows_read: records.len(),
        ..PhoneListReport::default()
    };

    for record in records {
        let Some(phone) = first_valid_phone(record, &columns) else {
            report.invalid += 1;
            continue;
        };
        if !seen.insert(phone.clone()) {
            report.duplicates += 1;
            continue;
        }
        phones.push(phone);
    }
    report.written = phones.len();

    PhoneList { phones, report }
}
