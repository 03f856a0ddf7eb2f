// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging capability injected into the assignment service.
//!
//! The service only ever calls [`AppLogger::log`]. Front-ends pick the sink:
//! the CLI forwards to `tracing`, tests use [`MemoryLogger`].

use std::sync::{Arc, Mutex, MutexGuard};

/// A sink for human-readable service messages. Logging never fails.
pub trait AppLogger {
    fn log(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl AppLogger for NoopLogger {
    fn log(&self, _message: &str) {}
}

/// Captures messages in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the service
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<String>> {
        // A poisoned buffer still holds valid strings.
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of all messages logged so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Number of logged messages satisfying `pred`.
    pub fn count_matching<F>(&self, pred: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        self.buffer().iter().filter(|m| pred(m)).count()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl AppLogger for MemoryLogger {
    fn log(&self, message: &str) {
        self.buffer().push(message.to_string());
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
