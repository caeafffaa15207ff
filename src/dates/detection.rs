use super::MonthTable;
use catalog_core::{DateFormat, FormatDecision, SampleCounts};
use tracing::debug;

/// Number of leading non-null dates inspected by the format vote
pub const DEFAULT_SAMPLE_SIZE: usize = 10;

/// Style of a single sampled date string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStyle {
    /// Three `/`-separated parts, "15/01/2023"
    Delimiter,
    /// Contains a localized month token
    MonthName,
    Other,
}

/// Classify one date string for the format vote
pub fn classify_sample(date: &str, months: &MonthTable) -> SampleStyle {
    if date.contains('/') && date.split('/').count() == 3 {
        SampleStyle::Delimiter
    } else if months.contains_month(date) {
        SampleStyle::MonthName
    } else {
        SampleStyle::Other
    }
}

/// Majority vote over the first `sample_size` non-null dates.
///
/// `dates` holds every non-null raw date of the batch in input order. The
/// batch is canonical only when delimiter-style samples strictly outnumber
/// month-name samples; ties select translation.
pub fn detect_format(dates: &[&str], months: &MonthTable, sample_size: usize) -> FormatDecision {
    let mut counts = SampleCounts::default();
    
    for (i, date) in dates.iter().take(sample_size).enumerate() {
        let style = classify_sample(date, months);
        debug!("  {}. '{}' - {:?}", i + 1, date, style);
        match style {
            SampleStyle::Delimiter => counts.delimiter += 1,
            SampleStyle::MonthName => counts.month_name += 1,
            SampleStyle::Other => counts.other += 1,
        }
    }
    
    let detected = if counts.delimiter > counts.month_name {
        DateFormat::DayMonthYear
    } else {
        DateFormat::MonthName
    };
    
    FormatDecision::new(detected, counts, dates.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sample() {
        let months = MonthTable::default();
        assert_eq!(classify_sample("15/01/2023", &months), SampleStyle::Delimiter);
        assert_eq!(classify_sample("15 января 2023", &months), SampleStyle::MonthName);
        assert_eq!(classify_sample("15/01", &months), SampleStyle::Other);
        assert_eq!(classify_sample("2023-01-15", &months), SampleStyle::Other);
    }

    #[test]
    fn test_delimiter_majority_is_canonical() {
        let months = MonthTable::default();
        let mut dates = vec!["15/01/2023"; 7];
        dates.extend(["1 мая 2001", "2 мая 2001", "3 мая 2001"]);
        
        let decision = detect_format(&dates, &months, DEFAULT_SAMPLE_SIZE);
        assert_eq!(decision.detected_format, DateFormat::DayMonthYear);
        assert!(!decision.needs_translation);
        assert_eq!(decision.sample, SampleCounts { delimiter: 7, month_name: 3, other: 0 });
        assert_eq!(decision.total_dates, 10);
    }

    #[test]
    fn test_month_name_majority_needs_translation() {
        let months = MonthTable::default();
        let dates = ["15 января 2023", "16 января 2023", "17/01/2023", "весной"];
        
        let decision = detect_format(&dates, &months, DEFAULT_SAMPLE_SIZE);
        assert_eq!(decision.detected_format, DateFormat::MonthName);
        assert!(decision.needs_translation);
        assert_eq!(decision.sample.other, 1);
    }

    #[test]
    fn test_tie_and_empty_select_translation() {
        let months = MonthTable::default();
        let tie = detect_format(&["15/01/2023", "15 января 2023"], &months, DEFAULT_SAMPLE_SIZE);
        assert!(tie.needs_translation);
        
        let empty = detect_format(&[], &months, DEFAULT_SAMPLE_SIZE);
        assert!(empty.needs_translation);
        assert_eq!(empty.total_dates, 0);
    }

    #[test]
    fn test_only_leading_sample_votes() {
        let months = MonthTable::default();
        let mut dates = vec!["1 мая 2001"; 10];
        dates.extend(vec!["15/01/2023"; 30]);
        
        let decision = detect_format(&dates, &months, DEFAULT_SAMPLE_SIZE);
        assert!(decision.needs_translation);
        assert_eq!(decision.sample.total(), 10);
        assert_eq!(decision.total_dates, 40);
    }
}
