// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The assignment service: owner of the in-memory assignment collection.
//!
//! Titles are unique under case-insensitive comparison. Routine outcomes such
//! as "not found" and "duplicate" come back as `bool`/`Option`; only entity
//! validation failures surface as [`Error`].

use crate::assignment::Assignment;
use crate::error::Result;
use crate::format::AssignmentFormatter;
use crate::logger::AppLogger;

/// Strategy used by [`AssignmentService::add`] to store a new assignment.
///
/// Closures with the matching signature implement this trait, which lets
/// tests substitute a failing insert.
pub trait Inserter {
    fn insert(&self, assignments: &mut Vec<Assignment>, assignment: Assignment) -> Result<()>;
}

impl<F> Inserter for F
where
    F: Fn(&mut Vec<Assignment>, Assignment) -> Result<()>,
{
    fn insert(&self, assignments: &mut Vec<Assignment>, assignment: Assignment) -> Result<()> {
        self(assignments, assignment)
    }
}

/// Appends to the end of the collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendInserter;

impl Inserter for AppendInserter {
    fn insert(&self, assignments: &mut Vec<Assignment>, assignment: Assignment) -> Result<()> {
        assignments.push(assignment);
        Ok(())
    }
}

fn titles_match_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Owns the assignment collection and enforces uniqueness.
pub struct AssignmentService {
    assignments: Vec<Assignment>,
    formatter: Box<dyn AssignmentFormatter>,
    logger: Box<dyn AppLogger>,
    inserter: Box<dyn Inserter>,
}

impl AssignmentService {
    pub fn new(formatter: Box<dyn AssignmentFormatter>, logger: Box<dyn AppLogger>) -> Self {
        AssignmentService {
            assignments: Vec::new(),
            formatter,
            logger,
            inserter: Box::new(AppendInserter),
        }
    }

    /// Replaces the insertion strategy used by [`AssignmentService::add`].
    pub fn with_inserter(mut self, inserter: Box<dyn Inserter>) -> Self {
        self.inserter = inserter;
        self
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Adds an assignment unless one with the same title (ignoring case)
    /// already exists.
    ///
    /// Insert failures are logged and reported as `false`; this never
    /// returns an error to the caller.
    pub fn add(&mut self, assignment: Assignment) -> bool {
        if self
            .assignments
            .iter()
            .any(|a| titles_match_ignore_case(a.title(), assignment.title()))
        {
            self.logger.log(&format!(
                "Duplicate assignment title rejected: {}",
                assignment.title()
            ));
            return false;
        }

        let id = assignment.id();
        let title = assignment.title().to_string();
        match self.inserter.insert(&mut self.assignments, assignment) {
            Ok(()) => {
                self.log_action("Added", id, &title, None);
                true
            }
            Err(e) => {
                self.logger.log(&format!("Error adding assignment: {}", e));
                false
            }
        }
    }

    /// Removes the first assignment whose title matches exactly.
    pub fn delete_by_title(&mut self, title: &str) -> bool {
        let Some(pos) = self.assignments.iter().position(|a| a.title() == title) else {
            return false;
        };
        let removed = self.assignments.remove(pos);
        self.log_action("Deleted", removed.id(), removed.title(), None);
        true
    }

    /// All assignments in insertion order.
    pub fn list_all(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn list_incomplete(&self) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| !a.is_completed())
            .collect()
    }

    /// One formatter line per assignment, in insertion order.
    pub fn list_formatted(&self) -> Vec<String> {
        self.assignments
            .iter()
            .map(|a| self.formatter.format(a))
            .collect()
    }

    pub fn find_by_title_exact(&self, title: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.title() == title)
    }

    pub fn find_by_title_case_insensitive(&self, title: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| titles_match_ignore_case(a.title(), title))
    }

    fn find_exact_mut(&mut self, title: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.title() == title)
    }

    /// Updates title and description of the assignment matching `title`
    /// exactly.
    ///
    /// Returns `Ok(false)` when nothing matches.
    ///
    /// # Errors
    ///
    /// Propagates the validation error from [`Assignment::update`].
    pub fn update_by_title(
        &mut self,
        title: &str,
        new_title: &str,
        new_description: &str,
    ) -> Result<bool> {
        match self.find_exact_mut(title) {
            Some(assignment) => {
                assignment.update(new_title, new_description)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn mark_complete_by_exact_title(&mut self, title: &str) -> bool {
        match self.find_exact_mut(title) {
            Some(assignment) => {
                assignment.mark_complete();
                true
            }
            None => false,
        }
    }

    /// Marks complete the assignment whose title matches ignoring case.
    /// Both outcomes are logged.
    pub fn mark_complete_by_case_insensitive_title(&mut self, title: &str) -> bool {
        let found = self
            .assignments
            .iter_mut()
            .find(|a| titles_match_ignore_case(a.title(), title));

        match found {
            Some(assignment) => {
                assignment.mark_complete();
                let (id, matched) = (assignment.id(), assignment.title().to_string());
                self.log_action("Marked complete", id, &matched, None);
                true
            }
            None => {
                self.logger.log(&format!(
                    "Attempted to mark complete but assignment not found: {}",
                    title
                ));
                false
            }
        }
    }

    /// Checks and logs whether the assignment matching `title` exactly is
    /// overdue.
    ///
    /// An unknown title also yields `false`; only the log message tells the
    /// two cases apart.
    pub fn is_overdue_by_exact_title(&self, title: &str) -> bool {
        match self.find_by_title_exact(title) {
            Some(assignment) => {
                let overdue = assignment.is_overdue();
                self.log_action(
                    "Checked if",
                    assignment.id(),
                    assignment.title(),
                    Some(format!("is overdue: {}", overdue).as_str()),
                );
                overdue
            }
            None => {
                self.logger.log(&format!(
                    "Attempted overdue check on non-existent assignment: {}",
                    title
                ));
                false
            }
        }
    }

    fn log_action(&self, action: &str, id: u32, title: &str, extra: Option<&str>) {
        let mut message = format!("{} Assignment [{}]: {}", action, id, title);
        if let Some(extra) = extra.filter(|e| !e.trim().is_empty()) {
            message.push_str(" - ");
            message.push_str(extra);
        }
        self.logger.log(&message);
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
