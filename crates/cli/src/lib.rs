// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! asgnrs - A personal assignment tracker library.
//!
//! This crate provides the front-end for the `asgn` CLI: configuration,
//! logging setup, and an interactive console menu driving an in-memory
//! [`AssignmentService`](asgn_core::AssignmentService).
//!
//! # Main Components
//!
//! - [`Config`] - User configuration (default due date offset, notes, logging)
//! - [`ConsoleUi`] - The menu loop, generic over its input and output streams
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use asgnrs::{build_service, Config, ConsoleUi};
//!
//! let config = Config::default();
//! let mut service = build_service();
//! let stdin = std::io::stdin();
//! ConsoleUi::new(&mut service, &config, stdin.lock(), std::io::stdout()).run()?;
//! ```

mod cli;
mod console;
mod env;
mod logging;
mod validate;

pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::Config;
pub use console::{ConsoleUi, MenuAction};
pub use error::{Error, Result};
pub use logging::TracingLogger;

use asgn_core::{AssignmentService, StatusFormatter};

/// Wires the production service: status formatter and `tracing` logger.
pub fn build_service() -> AssignmentService {
    AssignmentService::new(Box::new(StatusFormatter), Box::new(TracingLogger))
}

/// Run the CLI. This is the main entry point for library users and provides
/// a testable way to run the menu without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(file) = cli.log_file {
        config.log.file = Some(file);
    }
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }

    logging::setup_logging(&config.log);
    tracing::debug!(?config, "starting asgn");

    let mut service = build_service();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    ConsoleUi::new(&mut service, &config, stdin.lock(), stdout.lock()).run()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
