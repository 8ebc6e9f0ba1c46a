use crate::domain::email::sanitize_email;
use crate::domain::phone::normalize_phone;
use crate::domain::record::{CanonicalField, CanonicalRecord, SourceRecord};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldNormalizer {
    Trim,
    Phone,
    Email,
}

impl FieldNormalizer {
    pub fn apply(self, selected: &str) -> String {
        match self {
            FieldNormalizer::Trim => selected.to_string(),
            FieldNormalizer::Phone => normalize_phone(selected),
            FieldNormalizer::Email => sanitize_email(selected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: CanonicalField,
    pub candidates: Vec<String>,
    pub normalizer: FieldNormalizer,
}

impl FieldRule {
    fn new(field: CanonicalField, candidates: &[&str], normalizer: FieldNormalizer) -> Self {
        Self {
            field,
            candidates: candidates.iter().map(|name| name.to_string()).collect(),
            normalizer,
        }
    }

    pub fn resolve(&self, record: &SourceRecord) -> String {
        self.normalizer
            .apply(select_first_non_empty(record, &self.candidates))
    }
}

/// Target field to ordered source-column table. Candidate order is the
/// priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    rules: Vec<FieldRule>,
}

impl Default for ColumnMap {
    fn default() -> Self {
        use CanonicalField::*;
        use FieldNormalizer::*;

        Self {
            rules: vec![
                FieldRule::new(FirstName, &["First Name"], Trim),
                FieldRule::new(LastName, &["Last Name"], Trim),
                FieldRule::new(BusinessName, &["Company"], Trim),
                FieldRule::new(JobTitle, &["Job Title"], Trim),
                FieldRule::new(
                    PhoneNumber,
                    &["Primary Phone", "Business Phone", "Mobile Phone"],
                    Phone,
                ),
                FieldRule::new(EmailAddress, &["E-mail Address"], Email),
                FieldRule::new(StreetAddress, &["Business Street", "Home Street"], Trim),
                FieldRule::new(City, &["Business City", "Home City"], Trim),
                FieldRule::new(State, &["Business State", "Home State"], Trim),
                FieldRule::new(
                    ZipCode,
                    &["Business Postal Code", "Home Postal Code"],
                    Trim,
                ),
            ],
        }
    }
}

impl ColumnMap {
    pub fn rule(&self, field: CanonicalField) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Replaces the candidate chain of one field, keeping its normalizer.
    pub fn with_override<I, S>(
        mut self,
        field: CanonicalField,
        candidates: I,
    ) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if field.is_fixed() {
            return Err(CoreError::UnmappableField(field.header().to_string()));
        }

        let mut names = Vec::new();
        for raw in candidates {
            let name = raw.as_ref();
            if name.trim().is_empty() {
                return Err(CoreError::InvalidColumnName);
            }
            names.push(name.to_string());
        }
        if names.is_empty() {
            return Err(CoreError::EmptyCandidates(field.header().to_string()));
        }

        // Every mappable field has a rule in the default table.
        if let Some(rule) = self.rules.iter_mut().find(|rule| rule.field == field) {
            rule.candidates = names;
        }
        Ok(self)
    }

    pub fn map_record(&self, record: &SourceRecord) -> CanonicalRecord {
        let mut out = CanonicalRecord::new();
        for rule in &self.rules {
            *out.slot_mut(rule.field) = rule.resolve(record);
        }
        out
    }
}

/// Walks `candidates` in order and returns the first trimmed, non-empty
/// value. Columns missing from the record count as empty.
pub fn select_first_non_empty<'a, S>(record: &'a SourceRecord, candidates: &[S]) -> &'a str
where
    S: AsRef<str>,
{
    candidates
        .iter()
        .filter_map(|column| record.get(column.as_ref()))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

pub fn map_record(record: &SourceRecord, map: &ColumnMap) -> CanonicalRecord {
    map.map_record(record)
}

/// Maps every record independently; output order follows input order.
pub fn map_records(records: &[SourceRecord], map: &ColumnMap) -> Vec<CanonicalRecord> {
    records.iter().map(|record| map_record(record, map)).collect()
}

#[cfg(test)]
mod tests {
    use super::{map_record, map_records, select_first_non_empty, ColumnMap, FieldNormalizer};
    use crate::domain::record::{CanonicalField, CanonicalRecord, SourceRecord};
    use crate::error::CoreError;

    #[test]
    fn maps_single_source_fields_with_trim() {
        let record = SourceRecord::from_pairs([
            ("First Name", "  Jo "),
            ("Company", "Acme"),
            ("E-mail Address", "jo##@acme.com!"),
        ]);
        let mapped = map_record(&record, &ColumnMap::default());

        let mut expected = CanonicalRecord::new();
        expected.first_name = "Jo".to_string();
        expected.business_name = "Acme".to_string();
        expected.email_address = "jo@acme.com".to_string();
        assert_eq!(mapped, expected);
    }

    #[test]
    fn phone_chain_prefers_business_over_mobile() {
        let record = SourceRecord::from_pairs([
            ("Primary Phone", ""),
            ("Business Phone", "5551234567"),
            ("Mobile Phone", "5559876543"),
        ]);
        let mapped = map_record(&record, &ColumnMap::default());
        assert_eq!(mapped.phone_number, "5551234567");
    }

    #[test]
    fn phone_chain_skips_whitespace_only_candidates() {
        let record = SourceRecord::from_pairs([
            ("Primary Phone", "   "),
            ("Mobile Phone", "+1 (555) 987-6543"),
        ]);
        let mapped = map_record(&record, &ColumnMap::default());
        assert_eq!(mapped.phone_number, "5559876543");
    }

    #[test]
    fn invalid_selected_phone_does_not_fall_through() {
        let record = SourceRecord::from_pairs([
            ("Primary Phone", "555-1234"),
            ("Business Phone", "5551234567"),
        ]);
        let mapped = map_record(&record, &ColumnMap::default());
        assert_eq!(mapped.phone_number, "");
    }

    #[test]
    fn address_fields_fall_back_to_home() {
        let record = SourceRecord::from_pairs([
            ("Business Street", ""),
            ("Home Street", " 1 Main St "),
            ("Business City", "Springfield"),
            ("Home City", "Shelbyville"),
            ("Home State", "IL"),
            ("Business Postal Code", " "),
            ("Home Postal Code", "62701"),
        ]);
        let mapped = map_record(&record, &ColumnMap::default());
        assert_eq!(mapped.street_address, "1 Main St");
        assert_eq!(mapped.city, "Springfield");
        assert_eq!(mapped.state, "IL");
        assert_eq!(mapped.zip_code, "62701");
    }

    #[test]
    fn missing_columns_yield_empty_values() {
        let record = SourceRecord::from_pairs([("Business City", "")]);
        let mapped = map_record(&record, &ColumnMap::default());
        assert_eq!(mapped.city, "");
        assert_eq!(mapped.blocked, "No");
        assert_eq!(mapped.tags, "");
    }

    #[test]
    fn select_first_non_empty_returns_trimmed_value() {
        let record = SourceRecord::from_pairs([("A", " "), ("B", " b ")]);
        assert_eq!(select_first_non_empty(&record, &["A", "B"]), "b");
        assert_eq!(select_first_non_empty(&record, &["C"]), "");
    }

    #[test]
    fn map_records_preserves_order() {
        let records: Vec<SourceRecord> = ["A", "B", "C"]
            .iter()
            .map(|name| SourceRecord::from_pairs([("First Name", *name)]))
            .collect();
        let mapped = map_records(&records, &ColumnMap::default());
        let names: Vec<&str> = mapped.iter().map(|r| r.first_name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn override_replaces_chain_and_keeps_normalizer() {
        let map = ColumnMap::default()
            .with_override(CanonicalField::PhoneNumber, ["Mobile Phone", "Home Phone"])
            .expect("override");
        let rule = map.rule(CanonicalField::PhoneNumber).expect("rule");
        assert_eq!(rule.candidates, ["Mobile Phone", "Home Phone"]);
        assert_eq!(rule.normalizer, FieldNormalizer::Phone);

        let record = SourceRecord::from_pairs([
            ("Primary Phone", "5551234567"),
            ("Home Phone", "(555) 000-1111"),
        ]);
        assert_eq!(map.map_record(&record).phone_number, "5550001111");
    }

    #[test]
    fn override_rejects_fixed_and_empty_chains() {
        let err = ColumnMap::default()
            .with_override(CanonicalField::Blocked, ["Blocked"])
            .unwrap_err();
        assert_eq!(err, CoreError::UnmappableField("Blocked".to_string()));

        let err = ColumnMap::default()
            .with_override(CanonicalField::City, Vec::<String>::new())
            .unwrap_err();
        assert_eq!(err, CoreError::EmptyCandidates("City".to_string()));

        let err = ColumnMap::default()
            .with_override(CanonicalField::City, ["  "])
            .unwrap_err();
        assert_eq!(err, CoreError::InvalidColumnName);
    }
}
