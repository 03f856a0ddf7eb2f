// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for asgn-core operations.

use thiserror::Error;

/// All possible errors that can occur in asgn-core operations.
///
/// Lookups that find nothing are not errors; the service reports those as
/// plain `bool`/`Option` values.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} cannot be blank")]
    FieldBlank { field: &'static str },

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high")]
    InvalidPriority(String),

    #[error("insert failed: {0}")]
    Insert(String),
}

impl Error {
    /// Returns true for errors caused by rejected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::FieldBlank { .. } | Error::InvalidPriority(_))
    }
}

/// A specialized Result type for asgn-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
