//! Catalog Core - Shared data structures for the lecture catalog pipeline

pub mod record;
pub mod outcome;
pub mod format;

pub use record::{LectureRecord, RawLecture};
pub use outcome::{DateConversion, Extraction, LectureKey};
pub use format::{DateFormat, FormatDecision, SampleCounts};

/// Result type for Catalog Core operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error types for catalog I/O.
///
/// Per-record failures (no pattern match, unparsable date, malformed number)
/// are not errors; they resolve to the outcome types in [`outcome`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    
    #[error("Configuration error: {0}")]
    Config(String),
}
