use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

pub const BLOCKED_DEFAULT: &str = "No";

/// File name used when the output is written beside the input.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "formatted_textypro.csv";

pub const CANONICAL_HEADERS: [&str; 12] = [
    "First_Name",
    "Last_Name",
    "Buisness_Name",
    "Job_Title",
    "Phone_Number",
    "Email_Address",
    "Street_Address",
    "City",
    "State",
    "Zip_Code",
    "Blocked",
    "Tags",
];

/// One input row: header text paired with the raw cell value, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRecord {
    cells: Vec<(String, String)>,
}

impl SourceRecord {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cells: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Looks a column up by exact header text. When a header repeats, the
    /// rightmost cell wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Cell at a header position, for callers that must tell repeated
    /// headers apart.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    FirstName,
    LastName,
    BusinessName,
    JobTitle,
    PhoneNumber,
    EmailAddress,
    StreetAddress,
    City,
    State,
    ZipCode,
    Blocked,
    Tags,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 12] = [
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::BusinessName,
        CanonicalField::JobTitle,
        CanonicalField::PhoneNumber,
        CanonicalField::EmailAddress,
        CanonicalField::StreetAddress,
        CanonicalField::City,
        CanonicalField::State,
        CanonicalField::ZipCode,
        CanonicalField::Blocked,
        CanonicalField::Tags,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Output header text. `Buisness_Name` is spelled the way the messaging
    /// platform's import template expects it.
    pub fn header(self) -> &'static str {
        CANONICAL_HEADERS[self.index()]
    }

    /// Lowercase key used in configuration files.
    pub fn key(self) -> &'static str {
        match self {
            CanonicalField::FirstName => "first_name",
            CanonicalField::LastName => "last_name",
            CanonicalField::BusinessName => "business_name",
            CanonicalField::JobTitle => "job_title",
            CanonicalField::PhoneNumber => "phone_number",
            CanonicalField::EmailAddress => "email_address",
            CanonicalField::StreetAddress => "street_address",
            CanonicalField::City => "city",
            CanonicalField::State => "state",
            CanonicalField::ZipCode => "zip_code",
            CanonicalField::Blocked => "blocked",
            CanonicalField::Tags => "tags",
        }
    }

    /// Fields whose value never comes from the source file.
    pub fn is_fixed(self) -> bool {
        matches!(self, CanonicalField::Blocked | CanonicalField::Tags)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for CanonicalField {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        CanonicalField::ALL
            .into_iter()
            .find(|field| {
                field.key().eq_ignore_ascii_case(trimmed)
                    || field.header().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| CoreError::UnknownField(trimmed.to_string()))
    }
}

/// The fixed twelve-column output row. Empty strings stand for absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    pub first_name: String,
    pub last_name: String,
    pub business_name: String,
    pub job_title: String,
    pub phone_number: String,
    pub email_address: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub blocked: String,
    pub tags: String,
}

impl Default for CanonicalRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalRecord {
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            business_name: String::new(),
            job_title: String::new(),
            phone_number: String::new(),
            email_address: String::new(),
            street_address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            blocked: BLOCKED_DEFAULT.to_string(),
            tags: String::new(),
        }
    }

    pub fn get(&self, field: CanonicalField) -> &str {
        match field {
            CanonicalField::FirstName => &self.first_name,
            CanonicalField::LastName => &self.last_name,
            CanonicalField::BusinessName => &self.business_name,
            CanonicalField::JobTitle => &self.job_title,
            CanonicalField::PhoneNumber => &self.phone_number,
            CanonicalField::EmailAddress => &self.email_address,
            CanonicalField::StreetAddress => &self.street_address,
            CanonicalField::City => &self.city,
            CanonicalField::State => &self.state,
            CanonicalField::ZipCode => &self.zip_code,
            CanonicalField::Blocked => &self.blocked,
            CanonicalField::Tags => &self.tags,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: CanonicalField) -> &mut String {
        match field {
            CanonicalField::FirstName => &mut self.first_name,
            CanonicalField::LastName => &mut self.last_name,
            CanonicalField::BusinessName => &mut self.business_name,
            CanonicalField::JobTitle => &mut self.job_title,
            CanonicalField::PhoneNumber => &mut self.phone_number,
            CanonicalField::EmailAddress => &mut self.email_address,
            CanonicalField::StreetAddress => &mut self.street_address,
            CanonicalField::City => &mut self.city,
            CanonicalField::State => &mut self.state,
            CanonicalField::ZipCode => &mut self.zip_code,
            CanonicalField::Blocked => &mut self.blocked,
            CanonicalField::Tags => &mut self.tags,
        }
    }

    /// Values in output column order.
    pub fn values(&self) -> [&str; 12] {
        CanonicalField::ALL.map(|field| self.get(field))
    }
}
