//! Lecture record structures

use crate::outcome::{DateConversion, Extraction, LectureKey};
use crate::{CatalogError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input shape for one lecture as delivered by the scraper export.
///
/// Scraper exports carry the description under `text`. When an object has
/// both `description` and `text`, `description` wins. Any other column
/// (`order`, `thumbnailUrl`, `url`, ...) is ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RawLectureFields")]
pub struct RawLecture {
    pub title: String,
    pub description: Option<String>,
}

/// Wire form of [`RawLecture`] before the description columns are merged
#[derive(Deserialize)]
struct RawLectureFields {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl From<RawLectureFields> for RawLecture {
    fn from(fields: RawLectureFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description.or(fields.text),
        }
    }
}

impl RawLecture {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: title.into(),
            description,
        }
    }
    
    /// Parse a JSON array of lectures, naming the first malformed element
    pub fn parse_batch(json: &str) -> Result<Vec<RawLecture>> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value).map_err(|e| CatalogError::InvalidRecord {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// One lecture flowing through the catalog pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LectureRecord {
    /// Display title, never transformed
    pub title: String,
    
    /// Free-text description the identifier and date are extracted from
    pub description: Option<String>,
    
    /// Raw lecture numbering, e.g. "126-2" or "126"
    #[serde(rename = "number")]
    pub raw_identifier: Option<String>,
    
    /// Raw date phrase as written in the description
    #[serde(rename = "date")]
    pub raw_date_text: Option<String>,
    
    /// Date in DD/MM/YYYY form
    #[serde(rename = "date_standard")]
    pub canonical_date: Option<String>,
    
    /// Sort-only date value
    #[serde(skip)]
    pub date_ordinal: Option<NaiveDate>,
    
    /// Lecture number, 0 when undeterminable
    pub major_number: u32,
    
    /// Part number, 0 when undeterminable
    pub minor_number: u32,
    
    /// 1-based chronological position, 0 until the sorter runs
    pub order: usize,
}

impl LectureRecord {
    /// Create a record with no derived fields
    pub fn new(title: String, description: Option<String>) -> Self {
        Self {
            title,
            description,
            raw_identifier: None,
            raw_date_text: None,
            canonical_date: None,
            date_ordinal: None,
            major_number: 0,
            minor_number: 0,
            order: 0,
        }
    }
    
    /// Store the extractor's outcome
    pub fn with_extraction(mut self, extraction: Extraction) -> Self {
        let (identifier, date_text) = extraction.into_parts();
        self.raw_identifier = identifier;
        self.raw_date_text = date_text;
        self
    }
    
    /// Store the normalizer's outcome
    pub fn with_date(mut self, conversion: DateConversion) -> Self {
        let (canonical, ordinal) = conversion.into_parts();
        self.canonical_date = canonical;
        self.date_ordinal = ordinal;
        self
    }
    
    /// Store the derived ordering key
    pub fn with_key(mut self, key: LectureKey) -> Self {
        self.major_number = key.major;
        self.minor_number = key.minor;
        self
    }
    
    /// Ordering key as a value
    pub fn key(&self) -> LectureKey {
        LectureKey::new(self.major_number, self.minor_number)
    }
    
    /// Whether a date phrase was found but could not be parsed
    pub fn has_failed_date(&self) -> bool {
        self.raw_date_text.is_some() && self.date_ordinal.is_none()
    }
}

impl From<RawLecture> for LectureRecord {
    fn from(raw: RawLecture) -> Self {
        Self::new(raw.title, raw.description)
    }
}
