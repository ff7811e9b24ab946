use std::result;

use thiserror::Error;

/// Error types for Entrez client operations
#[derive(Error, Debug)]
pub enum EntrezError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Journal id resolution did not produce exactly one candidate
    #[error("journal id {id} resolved to {matches} catalog entries")]
    AmbiguousJournalId { id: String, matches: usize },
}

pub type Result<T> = result::Result<T, EntrezError>;
