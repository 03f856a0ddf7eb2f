// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core assignment types: Assignment and Priority.

use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How urgent an assignment is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Returns the display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Priority {
    type Error = Error;

    /// Converts a discriminant (0 = Low, 1 = Medium, 2 = High).
    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(value.to_string())),
        }
    }
}

/// A tracked piece of work.
///
/// Title and description are validated at construction. The completed flag
/// only ever moves from false to true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    id: u32,
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
    is_completed: bool,
    notes: String,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl Assignment {
    /// Creates a new, incomplete assignment with id 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldBlank`] if the title or description is empty or
    /// whitespace only.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<NaiveDate>,
        priority: Priority,
        notes: Option<String>,
    ) -> Result<Self> {
        let title = title.into();
        let description = description.into();

        if is_blank(&title) {
            return Err(Error::FieldBlank { field: "Title" });
        }
        if is_blank(&description) {
            return Err(Error::FieldBlank {
                field: "Description",
            });
        }

        Ok(Assignment {
            id: 0,
            title,
            description,
            due_date,
            priority,
            is_completed: false,
            notes: notes.unwrap_or_default(),
        })
    }

    /// Sets the caller-assigned identifier.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Free-text notes; empty when none were given.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Replaces title and description.
    ///
    /// Only the description is checked for blankness here; the title is
    /// validated at construction only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldBlank`] if the new description is blank. The
    /// assignment is left unchanged in that case.
    pub fn update(
        &mut self,
        new_title: impl Into<String>,
        new_description: impl Into<String>,
    ) -> Result<()> {
        let new_description = new_description.into();
        if is_blank(&new_description) {
            return Err(Error::FieldBlank {
                field: "Description",
            });
        }
        self.title = new_title.into();
        self.description = new_description;
        Ok(())
    }

    pub fn mark_complete(&mut self) {
        self.is_completed = true;
    }

    /// Returns true if the due date has passed and the work is not done.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Local::now().date_naive())
    }

    /// Same as [`Assignment::is_overdue`] with an explicit "today".
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => !self.is_completed && due < today,
            None => false,
        }
    }

    /// Multi-line summary used by the search view.
    ///
    /// ```text
    /// - Essay (High) due 2026-10-19
    /// Write 2000 words
    /// Notes: Submit via portal
    /// ```
    pub fn render(&self) -> String {
        let due = self
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let mut out = format!(
            "- {} ({}) due {}\n{}",
            self.title, self.priority, due, self.description
        );
        if !is_blank(&self.notes) {
            out.push_str("\nNotes: ");
            out.push_str(&self.notes);
        }
        out
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
#[path = "assignment_tests.rs"]
mod tests;
