// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_date = { Error::InvalidDate { input: "tomorrow".into() }, "tomorrow" },
    config_not_found = { Error::ConfigNotFound("/nope.toml".into()), "/nope.toml" },
    config = { Error::Config("bad key".into()), "bad key" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_from_core_keeps_message() {
    let err: Error = asgn_core::Error::FieldBlank { field: "Title" }.into();
    assert!(matches!(err, Error::Core(_)));
    assert_eq!(err.to_string(), "Title cannot be blank");
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
