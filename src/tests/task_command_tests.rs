use crate::commands::tasks::parse_deadline;
use crate::formatting::{clean_description, extract_first_name, truncate};

#[test]
fn test_parse_deadline_plain_date() {
    assert_eq!(parse_deadline("2026-08-07").unwrap(), "2026-08-07");
}

#[test]
fn test_parse_deadline_strips_time_suffix() {
    assert_eq!(
        parse_deadline("2026-08-07T12:30:00.000Z").unwrap(),
        "2026-08-07"
    );
}

#[test]
fn test_parse_deadline_rejects_garbage() {
    assert!(parse_deadline("next tuesday").is_err());
    assert!(parse_deadline("2026-13-40").is_err());
    assert!(parse_deadline("07/08/2026").is_err());
}

#[test]
fn test_truncate_short_strings_untouched() {
    assert_eq!(truncate("short", 10), "short");
}

#[test]
fn test_truncate_long_strings() {
    let truncated = truncate("a very long task title that keeps going", 10);
    assert_eq!(truncated.len(), 10);
    assert!(truncated.ends_with("..."));
}

#[test]
fn test_extract_first_name() {
    assert_eq!(extract_first_name("Ada Lovelace"), "Ada");
    assert_eq!(extract_first_name("Prince"), "Prince");
}

#[test]
fn test_clean_description_takes_first_line() {
    let cleaned = clean_description("first line\nsecond line");
    assert_eq!(cleaned, "first line.");
}

#[test]
fn test_clean_description_keeps_punctuation() {
    assert_eq!(clean_description("Done already!"), "Done already!");
    assert_eq!(clean_description("   \n\n"), "");
}
