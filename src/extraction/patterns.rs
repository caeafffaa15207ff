//! Description patterns used by the lecture cascade.
//!
//! Marker text is fixed for this corpus: Russian-language descriptions of
//! lectures read by Сергей Бугаев.

use super::LecturePattern;
use catalog_core::Extraction;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// "© Лекцию №126 (часть 2) Сергей Бугаев прочитал 15 января 2023 года"
static NUMBERED_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)©\s*Лекцию\s+№\s*([^(]*?)\s*\(часть\s*([^)]*?)\)\s*Сергей\s+Бугаев\s+прочитал\s+(.*?)\s+года")
        .expect("Invalid regex pattern")
});

/// "© Лекцию №126 Сергей Бугаев прочитал 15 января 2023 года"
static NUMBERED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)©\s*Лекцию\s+№\s*([^С]*?)\s*Сергей\s+Бугаев\s+прочитал\s+(.*?)\s+года")
        .expect("Invalid regex pattern")
});

/// "Лекция прочитана 15 января 2023 года"
static DATE_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Лекция\s+прочитана\s+(.*?)\s+года").expect("Invalid regex pattern")
});

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str().trim())
}

/// Numbered lecture with a parenthesized part, yields "<number>-<part>"
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedPartPattern;

impl LecturePattern for NumberedPartPattern {
    fn name(&self) -> &'static str {
        "numbered_part"
    }
    
    fn try_match(&self, text: &str) -> Option<Extraction> {
        let caps = NUMBERED_PART.captures(text)?;
        let number = group(&caps, 1)?;
        let part = group(&caps, 2)?;
        let date = group(&caps, 3)?;
        Some(Extraction::matched(Some(format!("{}-{}", number, part)), date))
    }
}

/// Numbered lecture without a part
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberedPattern;

impl LecturePattern for NumberedPattern {
    fn name(&self) -> &'static str {
        "numbered"
    }
    
    fn try_match(&self, text: &str) -> Option<Extraction> {
        let caps = NUMBERED.captures(text)?;
        let number = group(&caps, 1)?;
        let date = group(&caps, 2)?;
        Some(Extraction::matched(Some(number.to_string()), date))
    }
}

/// Unnumbered lecture, date only
#[derive(Debug, Clone, Copy, Default)]
pub struct DateOnlyPattern;

impl LecturePattern for DateOnlyPattern {
    fn name(&self) -> &'static str {
        "date_only"
    }
    
    fn try_match(&self, text: &str) -> Option<Extraction> {
        let caps = DATE_ONLY.captures(text)?;
        let date = group(&caps, 1)?;
        Some(Extraction::matched(None, date))
    }
}
