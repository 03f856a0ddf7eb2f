// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    title_blank = { Error::FieldBlank { field: "Title" }, "Title cannot be blank" },
    description_blank = {
        Error::FieldBlank { field: "Description" },
        "Description cannot be blank"
    },
    invalid_priority = { Error::InvalidPriority("999".into()), "invalid priority: '999'" },
    insert = { Error::Insert("simulated failure".into()), "simulated failure" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[parameterized(
    field_blank = { Error::FieldBlank { field: "Title" }, true },
    invalid_priority = { Error::InvalidPriority("urgent".into()), true },
    insert = { Error::Insert("boom".into()), false },
)]
fn error_is_validation(err: Error, expected: bool) {
    assert_eq!(err.is_validation(), expected);
}

#[test]
fn invalid_priority_lists_valid_values() {
    let msg = Error::InvalidPriority("urgent".into()).to_string();
    assert!(msg.contains("low, medium, high"));
}
