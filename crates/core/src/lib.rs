// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! asgn-core: Shared library for the asgn assignment tracker
//!
//! This crate provides the assignment entity, its status formatter, the
//! logging capability, and the in-memory service that front-ends drive.

pub mod assignment;
pub mod error;
pub mod format;
pub mod logger;
pub mod service;

pub use assignment::{Assignment, Priority};
pub use error::{Error, Result};
pub use format::{AssignmentFormatter, StatusFormatter};
pub use logger::{AppLogger, MemoryLogger, NoopLogger};
pub use service::{AppendInserter, AssignmentService, Inserter};
