//! Error handling for the CV ranker application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Batch of {count} files exceeds the limit of {max}; nothing was ingested")]
    BatchTooLarge { count: usize, max: usize },

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CvRankerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CvRankerError {
    fn from(err: anyhow::Error) -> Self {
        CvRankerError::Scoring(err.to_string())
    }
}
