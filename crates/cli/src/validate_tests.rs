// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[parameterized(
    low = { "low", Priority::Low },
    medium_title = { "Medium", Priority::Medium },
    high_upper = { "HIGH", Priority::High },
    padded = { " low ", Priority::Low },
)]
fn parse_priority_valid(input: &str, expected: Priority) {
    assert_eq!(parse_priority(input), Some(expected));
}

#[parameterized(
    empty = { "" },
    blank = { "   " },
    unknown = { "urgent" },
    numeric = { "2" },
)]
fn parse_priority_invalid(input: &str) {
    assert_eq!(parse_priority(input), None);
}

#[test]
fn parse_due_date_blank_uses_default_days() {
    let today = date(2026, 10, 16);
    assert_eq!(parse_due_date("", today, 3).unwrap(), Some(date(2026, 10, 19)));
    assert_eq!(parse_due_date("  ", today, 0).unwrap(), Some(today));
}

#[test]
fn parse_due_date_crosses_month_end() {
    let today = date(2026, 10, 30);
    assert_eq!(parse_due_date("", today, 3).unwrap(), Some(date(2026, 11, 2)));
}

#[parameterized(
    lower = { "none" },
    upper = { "NONE" },
    padded = { " None " },
)]
fn parse_due_date_none(input: &str) {
    assert_eq!(parse_due_date(input, date(2026, 1, 1), 3).unwrap(), None);
}

#[test]
fn parse_due_date_explicit() {
    assert_eq!(
        parse_due_date("2026-12-01", date(2026, 1, 1), 3).unwrap(),
        Some(date(2026, 12, 1))
    );
}

#[parameterized(
    words = { "tomorrow" },
    us_format = { "12/01/2026" },
    bad_day = { "2026-02-30" },
)]
fn parse_due_date_invalid(input: &str) {
    let err = parse_due_date(input, date(2026, 1, 1), 3).unwrap_err();
    assert!(matches!(err, Error::InvalidDate { .. }));
    assert!(err.to_string().contains(input));
}

#[test]
fn notes_or_default_prefers_input() {
    assert_eq!(
        notes_or_default(" Bring laptop ", Some("Notes 1")),
        Some("Bring laptop".to_string())
    );
}

#[test]
fn notes_or_default_falls_back() {
    assert_eq!(notes_or_default("", Some("Notes 1")), Some("Notes 1".to_string()));
    assert_eq!(notes_or_default("   ", None), None);
}

#[test]
fn trim_field_strips_whitespace() {
    assert_eq!(trim_field("  Essay \r"), "Essay");
}
