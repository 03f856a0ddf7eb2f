// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use std::path::PathBuf;

const QUICKSTART_HELP: &str = "\
Get started:
  asgn                          Open the assignment menu
  asgn --log-file asgn.log      Keep service logs out of the terminal
  ASGN_LOG=debug asgn           Override the log filter

Configuration is read from --config, then $ASGN_CONFIG, then
<config dir>/asgn/config.toml.";

#[derive(Parser, Debug)]
#[command(name = "asgn")]
#[command(version)]
#[command(about = "A personal assignment tracker with an interactive menu")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive (e.g. info, debug, asgn=warn)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
