#![forbid(unsafe_code)]
use chrono::NaiveDate;
use fruit_calendar::{
    load_exceptions, load_names, parse_names, CalendarError, DayClass, ExceptionConfig, Locale,
    RunContext,
};
use std::fs;
use tempfile::tempdir;

fn ctx(year: i32, month: u32) -> RunContext {
    RunContext::new(year, month, Locale::En, "Fruit").unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn names_keep_file_order_and_skip_blank_lines() {
    let roster = parse_names("Apple\r\nBanana\n\n  Cherry  \n").unwrap();
    assert_eq!(roster.names(), ["Apple", "Banana", "Cherry"]);
}

#[test]
fn blank_names_file_is_rejected() {
    let err = parse_names("\n \n").unwrap_err();
    assert!(matches!(err, CalendarError::Configuration(_)));
}

#[test]
fn missing_files_are_configuration_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    assert!(matches!(load_names(&missing), Err(CalendarError::Configuration(_))));
    assert!(matches!(
        load_exceptions(&missing, &ctx(2018, 12)),
        Err(CalendarError::Configuration(_))
    ));
}

#[test]
fn config_binds_dates_to_the_context() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("calendar.json");
    fs::write(
        &path,
        r#"{
            "holidays": {"12.25": "Christmas", "24": "", "2019.1.1": "New Year"},
            "working_days": ["15"]
        }"#,
    )
    .unwrap();

    let ex = load_exceptions(&path, &ctx(2018, 12)).unwrap();
    assert_eq!(ex.classify(date(2018, 12, 25)), DayClass::Holiday("Christmas"));
    assert_eq!(ex.classify(date(2018, 12, 24)), DayClass::Holiday(""));
    assert_eq!(ex.classify(date(2019, 1, 1)), DayClass::Holiday("New Year"));
    assert_eq!(ex.classify(date(2018, 12, 15)), DayClass::Normal);
    assert_eq!(ex.classify(date(2018, 12, 22)), DayClass::SaturdayOff);
}

#[test]
fn config_keys_are_optional_and_strict() {
    let empty = ExceptionConfig::from_json_str("{}").unwrap();
    assert_eq!(empty, ExceptionConfig::default());

    let err = ExceptionConfig::from_json_str(r#"{"holiday": {}}"#).unwrap_err();
    assert!(matches!(err, CalendarError::Configuration(_)));
}

#[test]
fn bad_date_in_config_reports_token() {
    let config = ExceptionConfig::from_json_str(r#"{"working_days": ["2.30"]}"#).unwrap();
    match config.resolve(&ctx(2018, 2)) {
        Err(CalendarError::DateParse { token, .. }) => assert_eq!(token, "2.30"),
        other => panic!("expected date error, got {other:?}"),
    }
}

#[test]
fn names_file_roundtrip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "Anna\nBéla\n").unwrap();
    let roster = load_names(&path).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.position("Béla"), Some(1));
}
