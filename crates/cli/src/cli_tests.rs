// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn parse_no_args() {
    let cli = Cli::try_parse_from(["asgn"]).unwrap();
    assert!(cli.config.is_none());
    assert!(cli.log_file.is_none());
    assert!(cli.log_level.is_none());
}

#[test]
fn parse_all_flags() {
    let cli = Cli::try_parse_from([
        "asgn",
        "-c",
        "my.toml",
        "--log-file",
        "out.log",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
    assert_eq!(cli.log_level.as_deref(), Some("debug"));
}

#[test]
fn parse_rejects_positional() {
    assert!(Cli::try_parse_from(["asgn", "list"]).is_err());
}
