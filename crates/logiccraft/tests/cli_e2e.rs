mod common;

use predicates::prelude::*;

use common::{logiccraft_in, workdir};

#[test]
fn version_flag() {
    let dir = workdir();
    logiccraft_in(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_subcommands() {
    let dir = workdir();
    logiccraft_in(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("accuracy"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let dir = workdir();
    logiccraft_in(dir.path()).assert().failure().code(2);
}

#[test]
fn completions_for_each_shell() {
    let dir = workdir();
    for shell in ["bash", "elvish", "fish", "powershell", "zsh"] {
        logiccraft_in(dir.path())
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("logiccraft"));
    }
}
