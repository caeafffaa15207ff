use catalog_core::{
    CatalogError, DateConversion, DateFormat, Extraction, FormatDecision, LectureKey, LectureRecord,
    RawLecture, SampleCounts,
};
use chrono::NaiveDate;

#[test]
fn test_record_stage_outcomes() {
    let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
    let record = LectureRecord::new("Лекция 126".to_string(), Some("описание".to_string()))
        .with_extraction(Extraction::matched(Some("126-2".to_string()), "15 января 2023"))
        .with_date(DateConversion::from_date(date))
        .with_key(LectureKey::new(126, 2));
    
    assert_eq!(record.raw_identifier.as_deref(), Some("126-2"));
    assert_eq!(record.raw_date_text.as_deref(), Some("15 января 2023"));
    assert_eq!(record.canonical_date.as_deref(), Some("15/01/2023"));
    assert_eq!(record.date_ordinal, Some(date));
    assert_eq!(record.key(), LectureKey::new(126, 2));
    assert_eq!(record.order, 0);
    assert!(!record.has_failed_date());
}

#[test]
fn test_no_match_and_unparsable_leave_nulls() {
    let record = LectureRecord::new("Без даты".to_string(), None)
        .with_extraction(Extraction::NoMatch)
        .with_date(DateConversion::Missing)
        .with_key(LectureKey::ZERO);
    
    assert!(record.raw_identifier.is_none());
    assert!(record.raw_date_text.is_none());
    assert!(record.canonical_date.is_none());
    assert!(record.key().is_zero());
    
    let failed = LectureRecord::new("Плохая дата".to_string(), None)
        .with_extraction(Extraction::matched(None, "тридцать второго мартобря"))
        .with_date(DateConversion::Unparsable);
    assert!(failed.has_failed_date());
}

#[test]
fn test_record_serialization_uses_catalog_columns() {
    let record = LectureRecord::new("T".to_string(), None)
        .with_extraction(Extraction::matched(Some("7".to_string()), "1 мая 2001"))
        .with_date(DateConversion::from_date(NaiveDate::from_ymd_opt(2001, 5, 1).unwrap()));
    
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["number"], "7");
    assert_eq!(json["date"], "1 мая 2001");
    assert_eq!(json["date_standard"], "01/05/2001");
    assert!(json.get("date_ordinal").is_none());
}

#[test]
fn test_raw_lecture_accepts_scraper_columns() {
    let input = r#"[
        {"title": "A", "text": "© Лекцию №1", "order": 3, "url": "https://example.org", "duration": "1:00:00"},
        {"title": "B", "description": "plain"},
        {"title": "C"}
    ]"#;
    
    let lectures: Vec<RawLecture> = serde_json::from_str(input).unwrap();
    assert_eq!(lectures.len(), 3);
    assert_eq!(lectures[0].description.as_deref(), Some("© Лекцию №1"));
    assert_eq!(lectures[1].description.as_deref(), Some("plain"));
    assert!(lectures[2].description.is_none());
}

#[test]
fn test_description_preferred_over_text() {
    let input = r#"[
        {"title": "Both", "description": "основное", "text": "запасное"},
        {"title": "Text only", "text": "запасное"},
        {"title": "Null description", "description": null, "text": "запасное"}
    ]"#;
    
    let lectures = RawLecture::parse_batch(input).unwrap();
    assert_eq!(lectures[0].description.as_deref(), Some("основное"));
    assert_eq!(lectures[1].description.as_deref(), Some("запасное"));
    assert_eq!(lectures[2].description.as_deref(), Some("запасное"));
}

#[test]
fn test_parse_batch_names_bad_element() {
    let input = r#"[{"title": "A"}, {"title": "B"}, {"text": "missing title"}]"#;
    
    match RawLecture::parse_batch(input) {
        Err(CatalogError::InvalidRecord { index, reason }) => {
            assert_eq!(index, 2);
            assert!(reason.contains("title"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    
    assert!(matches!(RawLecture::parse_batch("{}"), Err(CatalogError::Json(_))));
}

#[test]
fn test_format_decision_summary_layout() {
    let sample = SampleCounts { delimiter: 7, month_name: 3, other: 0 };
    let decision = FormatDecision::new(DateFormat::DayMonthYear, sample, 42);
    
    assert!(!decision.needs_translation);
    assert_eq!(decision.sample.total(), 10);
    
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["detected_format"], "DD/MM/YYYY");
    assert_eq!(json["needs_conversion"], false);
    assert_eq!(json["total_dates"], 42);
    assert_eq!(json["sample_analysis"]["dd_mm_yyyy_count"], 7);
    assert_eq!(json["sample_analysis"]["russian_format_count"], 3);
    
    let russian = FormatDecision::new(DateFormat::MonthName, SampleCounts::default(), 0);
    assert!(russian.needs_translation);
    assert_eq!(russian.detected_format.to_string(), "Russian");
}
