#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tagcount_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagcount").unwrap();
    cmd.env_remove("TAGCOUNT_INPUT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write an export file into `dir` and return its path.
pub fn write_export(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}
