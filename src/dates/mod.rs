//! Date normalization for lecture descriptions
//! 
//! Normalization runs in two phases: a batch-wide vote decides which date
//! dialect the batch is written in, then every raw date is converted with the
//! single strategy that vote selected.

pub mod months;
pub mod detection;
pub mod normalizer;

pub use months::MonthTable;
pub use detection::{classify_sample, detect_format, SampleStyle, DEFAULT_SAMPLE_SIZE};
pub use normalizer::{expand_two_digit_year, normalize, parse_natural_date, CANONICAL_FORMAT};
