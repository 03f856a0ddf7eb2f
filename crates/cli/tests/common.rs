// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Isolated run environment: a temp dir holding the config and log file.
pub struct Sandbox {
    pub temp: TempDir,
}

impl Sandbox {
    /// Creates a sandbox whose config sends logs to `asgn.log`.
    pub fn new() -> Self {
        Self::with_config("")
    }

    /// Creates a sandbox with extra top-level config lines.
    pub fn with_config(extra: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("asgn.log");
        let content = format!(
            "{}\n[log]\nlevel = \"info\"\nfile = \"{}\"\n",
            extra,
            log_path.display()
        );
        std::fs::write(temp.path().join("config.toml"), content).unwrap();
        Sandbox { temp }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp.path().join("config.toml")
    }

    /// Contents of the log file, empty if nothing was logged.
    pub fn log(&self) -> String {
        std::fs::read_to_string(self.temp.path().join("asgn.log")).unwrap_or_default()
    }

    /// `asgn --config <sandbox config>` with logging env cleared.
    pub fn asgn(&self) -> Command {
        let mut cmd = asgn();
        cmd.arg("--config")
            .arg(self.config_path())
            .env_remove("ASGN_LOG")
            .env_remove("ASGN_CONFIG")
            .current_dir(self.temp.path());
        cmd
    }

    /// Runs the menu with `lines` on stdin.
    pub fn session(&self, lines: &[&str]) -> assert_cmd::assert::Assert {
        let mut script = lines.join("\n");
        script.push('\n');
        self.asgn().write_stdin(script).assert()
    }
}

pub fn asgn() -> Command {
    cargo_bin_cmd!("asgn")
}
