//! CLI integration tests
//!
//! These only run commands that never open the system clipboard, so they
//! pass on machines without a display server.

use assert_cmd::Command;
use predicates::prelude::*;

fn pasteboard_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pasteboard"))
}

#[test]
fn help_output() {
    pasteboard_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("clear"))
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("clip"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn clip_help_documents_type_flag() {
    pasteboard_bin()
        .args(["clip", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("-t"));
}

#[test]
fn version_command() {
    pasteboard_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pasteboard"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_version_flag() {
    pasteboard_bin().arg("--version").assert().code(2);
}

#[test]
fn config_help() {
    pasteboard_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
#[cfg(unix)]
fn config_path_command() {
    let home = tempfile::tempdir().unwrap();
    pasteboard_bin()
        .args(["config", "path"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pasteboard"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
#[cfg(unix)]
fn config_set_then_get() {
    let home = tempfile::tempdir().unwrap();

    pasteboard_bin()
        .args(["config", "set", "default_type", "public.html"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .success();

    pasteboard_bin()
        .args(["config", "get", "default_type"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .success()
        .stdout("public.html\n");
}

#[test]
#[cfg(unix)]
fn config_init_then_list() {
    let home = tempfile::tempdir().unwrap();

    pasteboard_bin()
        .args(["config", "init"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file created"));

    pasteboard_bin()
        .args(["config", "list"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("default_type"))
        .stdout(predicate::str::contains("log_level"))
        .stdout(predicate::str::contains("warn"));
}
