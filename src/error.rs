use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpiryError {
    #[error("Transaction history is empty")]
    EmptyHistory,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Unknown time zone: {0}")]
    UnknownZone(String),
}

pub type Result<T> = std::result::Result<T, ExpiryError>;
