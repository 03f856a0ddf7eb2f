// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::ASGN_CONFIG, "ASGN_CONFIG");
    assert_eq!(vars::ASGN_LOG, "ASGN_LOG");
}

// Only this test touches ASGN_CONFIG, so the set/remove sequence cannot race.
#[test]
fn test_config_path() {
    std::env::remove_var("ASGN_CONFIG");
    assert_eq!(config_path(), None);

    std::env::set_var("ASGN_CONFIG", "  ");
    assert_eq!(config_path(), None);

    std::env::set_var("ASGN_CONFIG", "/tmp/asgn.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/asgn.toml")));

    std::env::remove_var("ASGN_CONFIG");
}
