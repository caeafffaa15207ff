use super::MonthTable;
use catalog_core::{DateConversion, DateFormat, FormatDecision};
use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

/// Canonical textual date form
pub const CANONICAL_FORMAT: &str = "%d/%m/%Y";

/// Smallest year accepted as written out in full
const MIN_FULL_YEAR: i32 = 1000;

/// Layouts accepted once month names are in English. Numeric slash dates are
/// read day-first, like the rest of the corpus.
const NATURAL_FORMATS: [&str; 8] = [
    "%d %B %Y",
    "%B %d %Y",
    "%Y %B %d",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d %m %Y",
];

/// Convert one raw date string using the strategy chosen for the batch
pub fn normalize(raw: Option<&str>, decision: &FormatDecision, months: &MonthTable) -> DateConversion {
    let Some(raw) = raw else {
        return DateConversion::Missing;
    };
    
    let parsed = match decision.detected_format {
        DateFormat::DayMonthYear => NaiveDate::parse_from_str(raw.trim(), CANONICAL_FORMAT)
            .ok()
            .filter(|date| date.year() >= MIN_FULL_YEAR),
        DateFormat::MonthName => {
            let translated = months.translate(raw.trim());
            parse_natural_date(&translated)
                .and_then(|date| resolve_short_year(date, Utc::now().year()))
        }
    };
    
    match parsed {
        Some(date) => DateConversion::from_date(date),
        None => {
            debug!("Could not parse date '{}'", raw);
            DateConversion::Unparsable
        }
    }
}

/// Map a two-digit year into the century window centered on `reference_year`
/// (at most 50 years back, under 50 years ahead).
pub fn expand_two_digit_year(year: i32, reference_year: i32) -> i32 {
    let mut expanded = year + reference_year / 100 * 100;
    if expanded >= reference_year + 50 {
        expanded -= 100;
    } else if expanded < reference_year - 50 {
        expanded += 100;
    }
    expanded
}

/// Expand two-digit years; three-digit years are rejected
fn resolve_short_year(date: NaiveDate, reference_year: i32) -> Option<NaiveDate> {
    match date.year() {
        year if year >= MIN_FULL_YEAR => Some(date),
        year @ 0..=99 => date.with_year(expand_two_digit_year(year, reference_year)),
        _ => None,
    }
}

/// Parse a date written with English month names in day-month-year or
/// similar order. Commas and repeated whitespace are ignored; a missing
/// year is a failure.
pub fn parse_natural_date(text: &str) -> Option<NaiveDate> {
    let cleaned = text
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    
    if cleaned.is_empty() {
        return None;
    }
    
    NATURAL_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&cleaned, format).ok())
}
