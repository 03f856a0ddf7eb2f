// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Log output for the CLI.
//!
//! Service messages go through [`TracingLogger`]; [`setup_logging`] decides
//! where they end up.

use std::fs;

use asgn_core::AppLogger;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::env::vars;

/// Forwards service messages to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl AppLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "asgn", "{}", message);
    }
}

/// Builds the filter: `ASGN_LOG` if set and valid, else the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(vars::ASGN_LOG).unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber.
///
/// Writes to the configured log file, falling back to stderr when there is
/// none or it cannot be opened.
pub fn setup_logging(config: &LogConfig) {
    let filter = env_filter(&config.level);

    let file = config.file.as_ref().and_then(|path| {
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("warning: cannot open log file {}: {}", path.display(), e))
            .ok()
    });

    // try_init: an embedding host may already have installed a subscriber.
    let _ = match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .try_init(),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
