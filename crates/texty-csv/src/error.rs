use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing header row in {0}")]
    MissingHeader(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl CsvError {
    /// True when the input file itself could not be found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CsvError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;
