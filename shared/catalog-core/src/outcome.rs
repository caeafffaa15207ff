//! Tagged outcomes of the per-record pipeline stages

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of running the pattern cascade over a description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A pattern matched. Date-only patterns carry no identifier.
    Matched {
        identifier: Option<String>,
        date_text: String,
    },
    
    /// No pattern matched, or there was no description
    NoMatch,
}

impl Extraction {
    pub fn matched(identifier: Option<String>, date_text: impl Into<String>) -> Self {
        Extraction::Matched {
            identifier,
            date_text: date_text.into(),
        }
    }
    
    pub fn is_match(&self) -> bool {
        matches!(self, Extraction::Matched { .. })
    }
    
    /// Split into (identifier, date_text)
    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            Extraction::Matched { identifier, date_text } => (identifier, Some(date_text)),
            Extraction::NoMatch => (None, None),
        }
    }
}

/// Result of normalizing one raw date string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateConversion {
    /// Parsed into canonical DD/MM/YYYY text and a sortable date
    Parsed { canonical: String, ordinal: NaiveDate },
    
    /// A date string was present but could not be parsed
    Unparsable,
    
    /// No date string to convert
    Missing,
}

impl DateConversion {
    pub fn from_date(date: NaiveDate) -> Self {
        DateConversion::Parsed {
            canonical: date.format("%d/%m/%Y").to_string(),
            ordinal: date,
        }
    }
    
    pub fn is_parsed(&self) -> bool {
        matches!(self, DateConversion::Parsed { .. })
    }
    
    /// Split into (canonical, ordinal)
    pub fn into_parts(self) -> (Option<String>, Option<NaiveDate>) {
        match self {
            DateConversion::Parsed { canonical, ordinal } => (Some(canonical), Some(ordinal)),
            DateConversion::Unparsable | DateConversion::Missing => (None, None),
        }
    }
}

/// Numeric (lecture, part) pair derived from an identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LectureKey {
    pub major: u32,
    pub minor: u32,
}

impl LectureKey {
    /// Key used when no number can be determined
    pub const ZERO: LectureKey = LectureKey { major: 0, minor: 0 };
    
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
    
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
