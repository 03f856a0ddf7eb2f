// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing and validation of raw console input.

use asgn_core::Priority;
use chrono::{Days, NaiveDate};

use crate::error::{Error, Result};

/// Format accepted for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trim whitespace from a text field.
pub fn trim_field(text: &str) -> String {
    text.trim().to_string()
}

/// Parse a priority name, ignoring case. Blank input is rejected.
pub fn parse_priority(input: &str) -> Option<Priority> {
    if input.trim().is_empty() {
        return None;
    }
    input.parse().ok()
}

/// Parse a due date entered at the prompt.
///
/// - blank: `today` plus `default_days`
/// - `none`: no due date
/// - otherwise a `YYYY-MM-DD` date
pub fn parse_due_date(
    input: &str,
    today: NaiveDate,
    default_days: u32,
) -> Result<Option<NaiveDate>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return today
            .checked_add_days(Days::new(u64::from(default_days)))
            .map(Some)
            .ok_or_else(|| Error::InvalidDate {
                input: format!("today + {} days", default_days),
            });
    }
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| Error::InvalidDate {
            input: trimmed.to_string(),
        })
}

/// Blank notes fall back to the configured default.
pub fn notes_or_default(input: &str, default_notes: Option<&str>) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default_notes.map(String::from)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
