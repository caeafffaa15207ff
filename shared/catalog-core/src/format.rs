//! Batch-wide date format detection summary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Date dialect a batch is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// Already canonical "15/01/2023"
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    
    /// Russian month names, "15 января 2023"
    #[serde(rename = "Russian")]
    MonthName,
}

impl DateFormat {
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "DD/MM/YYYY",
            DateFormat::MonthName => "Russian",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-style counts over the detection sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCounts {
    #[serde(rename = "dd_mm_yyyy_count")]
    pub delimiter: usize,
    
    #[serde(rename = "russian_format_count")]
    pub month_name: usize,
    
    #[serde(rename = "other_format_count")]
    pub other: usize,
}

impl SampleCounts {
    pub fn total(&self) -> usize {
        self.delimiter + self.month_name + self.other
    }
}

/// Outcome of the batch format vote, persisted as `date_format_analysis.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDecision {
    pub detected_format: DateFormat,
    
    #[serde(rename = "needs_conversion")]
    pub needs_translation: bool,
    
    /// Non-null date strings in the whole batch
    pub total_dates: usize,
    
    #[serde(rename = "sample_analysis")]
    pub sample: SampleCounts,
}

impl FormatDecision {
    pub fn new(detected_format: DateFormat, sample: SampleCounts, total_dates: usize) -> Self {
        Self {
            detected_format,
            needs_translation: detected_format == DateFormat::MonthName,
            total_dates,
            sample,
        }
    }
}
