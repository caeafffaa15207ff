//! Lecture Catalog
//! 
//! Builds a chronologically ordered catalog from free-text lecture metadata:
//! pattern extraction, date dialect detection and normalization, numeric key
//! derivation and a stable multi-key sort.

pub mod config;
pub mod extraction;
pub mod dates;
pub mod ordering;
pub mod processing;
pub mod export;

// Re-export main types for easy access
pub use crate::config::{Config, ConfigBuilder, ExportFormat};
pub use crate::extraction::{LecturePattern, PatternCascade};
pub use crate::dates::{detect_format, normalize, MonthTable};
pub use crate::ordering::{assign_order, derive_key};
pub use crate::processing::{CatalogProcessor, CatalogResult, CatalogSummary, ConversionStats};
pub use catalog_core::{
    CatalogError, DateConversion, DateFormat, Extraction, FormatDecision, LectureKey,
    LectureRecord, RawLecture, SampleCounts,
};
