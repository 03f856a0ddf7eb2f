// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive console menu over the assignment service.
//!
//! Every service failure is printed as a message; only I/O errors on the
//! console streams end the loop with an error.

use std::io::{BufRead, Write};

use asgn_core::{Assignment, AssignmentService};
use chrono::Local;

use crate::config::Config;
use crate::error::Result;
use crate::validate::{notes_or_default, parse_due_date, parse_priority, trim_field};

const MENU: &str = "\
Assignment Manager Menu:
1. Add Assignment
2. List All Assignments
3. List Incomplete Assignments
4. Mark Assignment as Complete
5. Search Assignment by Title
6. Update Assignment
7. Delete Assignment
8. Show Status Summary
9. Check if Overdue
0. Exit";

/// A menu entry selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    ListAll,
    ListIncomplete,
    MarkComplete,
    Search,
    Update,
    Delete,
    StatusSummary,
    CheckOverdue,
    Exit,
}

impl MenuAction {
    /// Maps a menu choice ("0".."9") to its action.
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::Add),
            "2" => Some(MenuAction::ListAll),
            "3" => Some(MenuAction::ListIncomplete),
            "4" => Some(MenuAction::MarkComplete),
            "5" => Some(MenuAction::Search),
            "6" => Some(MenuAction::Update),
            "7" => Some(MenuAction::Delete),
            "8" => Some(MenuAction::StatusSummary),
            "9" => Some(MenuAction::CheckOverdue),
            "0" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// The menu loop. Reads choices from `input` and writes to `output`.
pub struct ConsoleUi<'a, R, W> {
    service: &'a mut AssignmentService,
    config: &'a Config,
    input: R,
    output: W,
    next_id: u32,
}

impl<'a, R: BufRead, W: Write> ConsoleUi<'a, R, W> {
    pub fn new(
        service: &'a mut AssignmentService,
        config: &'a Config,
        input: R,
        output: W,
    ) -> Self {
        let next_id = service
            .list_all()
            .iter()
            .map(Assignment::id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        ConsoleUi {
            service,
            config,
            input,
            output,
            next_id,
        }
    }

    /// Runs until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            write!(self.output, "Choose an option: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            };

            match MenuAction::parse(&choice) {
                Some(MenuAction::Add) => self.add_assignment()?,
                Some(MenuAction::ListAll) => self.list_all()?,
                Some(MenuAction::ListIncomplete) => self.list_incomplete()?,
                Some(MenuAction::MarkComplete) => self.mark_complete()?,
                Some(MenuAction::Search) => self.search()?,
                Some(MenuAction::Update) => self.update()?,
                Some(MenuAction::Delete) => self.delete()?,
                Some(MenuAction::StatusSummary) => self.status_summary()?,
                Some(MenuAction::CheckOverdue) => self.check_overdue()?,
                Some(MenuAction::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prints a prompt and reads the trimmed answer. End of input reads as
    /// an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|l| trim_field(&l)).unwrap_or_default())
    }

    fn add_assignment(&mut self) -> Result<()> {
        let title = self.ask("Enter assignment title:")?;
        let description = self.ask("Enter assignment description:")?;
        let priority_input = self.ask("Enter assignment priority (Low, Medium, High):")?;

        let Some(priority) = parse_priority(&priority_input) else {
            writeln!(
                self.output,
                "Priority must be Low, Medium, or High (cannot be blank)."
            )?;
            return Ok(());
        };

        let due_input = self.ask(&format!(
            "Enter due date (YYYY-MM-DD, blank for {} days from today, 'none' for no date):",
            self.config.default_due_days
        ))?;
        let today = Local::now().date_naive();
        let due_date = match parse_due_date(&due_input, today, self.config.default_due_days) {
            Ok(d) => d,
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                return Ok(());
            }
        };

        let notes_input = self.ask("Enter notes (optional):")?;
        let notes = notes_or_default(&notes_input, self.config.default_notes.as_deref());

        let assignment = match Assignment::new(title, description, due_date, priority, notes) {
            Ok(a) => a.with_id(self.next_id),
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                return Ok(());
            }
        };

        if self.service.add(assignment) {
            self.next_id = self.next_id.saturating_add(1);
            writeln!(self.output, "Assignment added successfully.")?;
        } else {
            writeln!(self.output, "An assignment with this title already exists.")?;
        }
        Ok(())
    }

    fn write_listing<'b>(
        output: &mut W,
        assignments: impl IntoIterator<Item = &'b Assignment>,
        empty_message: &str,
    ) -> Result<()> {
        let mut any = false;
        for a in assignments {
            any = true;
            writeln!(
                output,
                "- {}: {} (Completed: {})",
                a.title(),
                a.description(),
                a.is_completed()
            )?;
        }
        if !any {
            writeln!(output, "{}", empty_message)?;
        }
        Ok(())
    }

    fn list_all(&mut self) -> Result<()> {
        Self::write_listing(
            &mut self.output,
            self.service.list_all(),
            "No assignments found.",
        )
    }

    fn list_incomplete(&mut self) -> Result<()> {
        Self::write_listing(
            &mut self.output,
            self.service.list_incomplete(),
            "No incomplete assignments found.",
        )
    }

    fn mark_complete(&mut self) -> Result<()> {
        let title = self.ask("Enter the title of the assignment to mark as complete:")?;
        if self.service.mark_complete_by_case_insensitive_title(&title) {
            writeln!(self.output, "Assignment marked as complete.")?;
        } else {
            writeln!(self.output, "Assignment not found.")?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        let title = self.ask("Enter the title of the assignment to search:")?;
        match self.service.find_by_title_exact(&title) {
            Some(a) => writeln!(self.output, "{}", a.render())?,
            None => writeln!(self.output, "Assignment not found.")?,
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let old_title = self.ask("Enter the title of the assignment to update:")?;
        let new_title = self.ask("Enter new title:")?;
        let new_description = self.ask("Enter new description:")?;

        match self
            .service
            .update_by_title(&old_title, &new_title, &new_description)
        {
            Ok(true) => writeln!(self.output, "Assignment updated successfully.")?,
            Ok(false) => writeln!(self.output, "Assignment not found or update failed.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let title = self.ask("Enter the title of the assignment to delete:")?;
        if self.service.delete_by_title(&title) {
            writeln!(self.output, "Assignment deleted successfully.")?;
        } else {
            writeln!(self.output, "Assignment not found or could not be deleted.")?;
        }
        Ok(())
    }

    fn status_summary(&mut self) -> Result<()> {
        let lines = self.service.list_formatted();
        if lines.is_empty() {
            writeln!(self.output, "No assignments found.")?;
        }
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn check_overdue(&mut self) -> Result<()> {
        let title = self.ask("Enter the title of the assignment to check:")?;
        let exists = self.service.find_by_title_exact(&title).is_some();
        // Always call through so the check is logged either way.
        let overdue = self.service.is_overdue_by_exact_title(&title);
        let message = match (exists, overdue) {
            (false, _) => "Assignment not found.",
            (true, true) => "Assignment is overdue.",
            (true, false) => "Assignment is not overdue.",
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
