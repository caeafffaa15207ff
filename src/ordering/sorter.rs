use catalog_core::LectureRecord;
use std::cmp::Ordering;

/// Compare two records by (date, lecture, part); undated records go last
pub fn chronological_cmp(a: &LectureRecord, b: &LectureRecord) -> Ordering {
    let by_date = match (a.date_ordinal, b.date_ordinal) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    
    by_date.then_with(|| a.key().cmp(&b.key()))
}

/// Sort the whole batch and assign the 1-based `order` of every record.
///
/// The sort is stable, so records with equal keys keep their input order.
pub fn assign_order(mut records: Vec<LectureRecord>) -> Vec<LectureRecord> {
    records.sort_by(chronological_cmp);
    
    for (index, record) in records.iter_mut().enumerate() {
        record.order = index + 1;
    }
    
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{DateConversion, LectureKey};
    use chrono::NaiveDate;

    fn record(title: &str, date: Option<(i32, u32, u32)>, major: u32, minor: u32) -> LectureRecord {
        let conversion = match date {
            Some((y, m, d)) => DateConversion::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            None => DateConversion::Missing,
        };
        LectureRecord::new(title.to_string(), None)
            .with_date(conversion)
            .with_key(LectureKey::new(major, minor))
    }

    fn titles(records: &[LectureRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_date_then_number_then_part() {
        let records = vec![
            record("c", Some((2023, 1, 15)), 126, 2),
            record("a", Some((2022, 12, 1)), 130, 0),
            record("b", Some((2023, 1, 15)), 126, 1),
            record("d", Some((2023, 1, 15)), 127, 0),
        ];
        
        let sorted = assign_order(records);
        assert_eq!(titles(&sorted), vec!["a", "b", "c", "d"]);
        assert_eq!(sorted.iter().map(|r| r.order).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_undated_records_sort_last() {
        let records = vec![
            record("undated-low", None, 1, 0),
            record("dated-high", Some((2030, 1, 1)), 999, 9),
            record("undated-zero", None, 0, 0),
        ];
        
        let sorted = assign_order(records);
        assert_eq!(titles(&sorted), vec!["dated-high", "undated-zero", "undated-low"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let records = vec![
            record("first", Some((2020, 5, 1)), 0, 0),
            record("second", Some((2020, 5, 1)), 0, 0),
            record("third", None, 0, 0),
            record("fourth", None, 0, 0),
            record("fifth", Some((2020, 5, 1)), 0, 0),
        ];
        
        let sorted = assign_order(records);
        assert_eq!(titles(&sorted), vec!["first", "second", "fifth", "third", "fourth"]);
    }

    #[test]
    fn test_order_is_dense_and_deterministic() {
        let build = || {
            (0..50u32)
                .map(|i| {
                    let date = (i % 3 != 0).then(|| (2000 + (i % 7) as i32, 1 + i % 12, 1 + i % 28));
                    record(&i.to_string(), date, i % 5, i % 2)
                })
                .collect::<Vec<_>>()
        };
        
        let first = assign_order(build());
        let second = assign_order(build());
        
        let mut orders: Vec<usize> = first.iter().map(|r| r.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, (1..=50).collect::<Vec<_>>());
        assert_eq!(titles(&first), titles(&second));
    }

    #[test]
    fn test_empty_batch() {
        assert!(assign_order(Vec::new()).is_empty());
    }
}
