// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-line status formatting for assignments.

use crate::assignment::Assignment;

/// Renders an assignment as a single display line.
pub trait AssignmentFormatter {
    fn format(&self, assignment: &Assignment) -> String;
}

/// Formats as `[{id}] {title} - {status}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusFormatter;

impl StatusFormatter {
    /// Derived status label: Completed, Overdue or Incomplete.
    pub fn status_label(assignment: &Assignment) -> &'static str {
        if assignment.is_completed() {
            "Completed"
        } else if assignment.is_overdue() {
            "Overdue"
        } else {
            "Incomplete"
        }
    }
}

impl AssignmentFormatter for StatusFormatter {
    fn format(&self, assignment: &Assignment) -> String {
        format!(
            "[{}] {} - {}",
            assignment.id(),
            assignment.title(),
            Self::status_label(assignment)
        )
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
