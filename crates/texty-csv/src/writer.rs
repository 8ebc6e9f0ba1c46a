use crate::error::{CsvError, Result};
use csv::{Terminator, WriterBuilder};
use texty_core::{CanonicalRecord, CANONICAL_HEADERS, PHONE_LIST_HEADER};

/// Renders the canonical header row followed by one row per record.
pub fn render_canonical(records: &[CanonicalRecord]) -> Result<Vec<u8>> {
    let mut writer = new_writer();
    writer.write_record(CANONICAL_HEADERS)?;
    for record in records {
        writer.write_record(record.values())?;
    }
    finish(writer)
}

pub fn render_phone_list(phones: &[String]) -> Result<Vec<u8>> {
    let mut writer = new_writer();
    writer.write_record([PHONE_LIST_HEADER])?;
    for phone in phones {
        writer.write_record([phone])?;
    }
    finish(writer)
}

fn new_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|err| CsvError::Csv(csv::Error::from(err.into_error())))
}

#[cfg(test)]
mod tests {
    use super::{render_canonical, render_phone_list};
    use texty_core::CanonicalRecord;

    const HEADER: &str = "First_Name,Last_Name,Buisness_Name,Job_Title,Phone_Number,Email_Address,Street_Address,City,State,Zip_Code,Blocked,Tags\r\n";

    #[test]
    fn render_canonical_writes_header_without_rows() {
        let out = render_canonical(&[]).expect("render");
        assert_eq!(String::from_utf8(out).expect("utf8"), HEADER);
    }

    #[test]
    fn render_canonical_quotes_only_when_needed() {
        let mut record = CanonicalRecord::new();
        record.first_name = "Jo".to_string();
        record.business_name = "Acme, Inc.".to_string();
        record.street_address = "1 \"Main\" St".to_string();

        let out = String::from_utf8(render_canonical(&[record]).expect("render")).expect("utf8");
        let expected = format!(
            "{HEADER}Jo,,\"Acme, Inc.\",,,,\"1 \"\"Main\"\" St\",,,,No,\r\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn render_phone_list_writes_single_column() {
        let phones = vec!["415-555-1212".to_string(), "212-555-0100".to_string()];
        let out = String::from_utf8(render_phone_list(&phones).expect("render")).expect("utf8");
        assert_eq!(out, "Phone\r\n415-555-1212\r\n212-555-0100\r\n");
    }
}
