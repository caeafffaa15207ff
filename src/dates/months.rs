use std::collections::HashMap;

/// Russian genitive month names and their English equivalents
const RUSSIAN_MONTHS: [(&str, &str); 12] = [
    ("января", "January"),
    ("февраля", "February"),
    ("марта", "March"),
    ("апреля", "April"),
    ("мая", "May"),
    ("июня", "June"),
    ("июля", "July"),
    ("августа", "August"),
    ("сентября", "September"),
    ("октября", "October"),
    ("ноября", "November"),
    ("декабря", "December"),
];

/// Immutable localized-month lookup table
///
/// No token is a prefix of another, so replacement order has no effect on
/// the translated text.
#[derive(Debug, Clone)]
pub struct MonthTable {
    /// Localized token -> canonical English month name
    months: HashMap<&'static str, &'static str>,
}

impl MonthTable {
    /// Table for Russian genitive month names
    pub fn russian() -> Self {
        Self {
            months: RUSSIAN_MONTHS.iter().copied().collect(),
        }
    }
    
    /// Number of month tokens
    pub fn len(&self) -> usize {
        self.months.len()
    }
    
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
    
    /// Canonical name for a localized token
    pub fn canonical_name(&self, token: &str) -> Option<&'static str> {
        self.months.get(token).copied()
    }
    
    /// Whether the text contains any localized month token
    pub fn contains_month(&self, text: &str) -> bool {
        self.months.keys().any(|token| text.contains(token))
    }
    
    /// Replace every localized month token with its canonical name
    pub fn translate(&self, text: &str) -> String {
        self.months
            .iter()
            .fold(text.to_string(), |acc, (token, name)| acc.replace(token, name))
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        Self::russian()
    }
}
