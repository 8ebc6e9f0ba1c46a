use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown canonical field: {0}")]
    UnknownField(String),
    #[error("field {0} is fixed and cannot be mapped from source columns")]
    UnmappableField(String),
    #[error("field {0} needs at least one source column")]
    EmptyCandidates(String),
    #[error("source column names cannot be blank")]
    InvalidColumnName,
}
