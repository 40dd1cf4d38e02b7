//! Shared helpers for `logiccraft` end-to-end tests.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory, so no stray `logiccraft.toml` is picked up.
pub fn workdir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

pub fn logiccraft_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_logiccraft"));
    cmd.current_dir(dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write fixture");
}
