//! End-to-end tests for the `loxc` binary.

#![allow(clippy::unwrap_used)]

use std::io::Write;
use assert_cmd::Command;

use predicates::prelude::*;

fn loxc() -> Command {
    let mut cmd = Command::cargo_bin("loxc").unwrap();
    cmd.env_remove("LOX_LOG").env_remove("RUST_LOG");
    cmd
}

fn script(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lox")
        .tempfile()
        .unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file
}

#[test]
fn clean_script_exits_zero() {
    let file = script("print \"hi\";\n");
    loxc()
        .arg(file.path())
        .assert()
        .success()
        .stdout("PRINT print\nSTRING \"hi\"\nSEMICOLON ;\nEOF \n")
        .stderr("");
}

#[test]
fn lexical_error_exits_65() {
    let file = script("var a = @;\n");
    loxc()
        .arg("--color=never")
        .arg(file.path())
        .assert()
        .code(65)
        .stderr("[line 1:9] Error[E0002]: Unexpected character\n")
        // Scanning continues past the error.
        .stdout(predicate::str::ends_with("SEMICOLON ;\nEOF \n"));
}

#[test]
fn literals_flag_shows_values() {
    let file = script("12.5");
    loxc()
        .arg("--literals")
        .arg(file.path())
        .assert()
        .success()
        .stdout("NUMBER 12.5 12.5\nEOF \n");
}

#[test]
fn too_many_arguments_exits_64() {
    loxc()
        .args(["a.lox", "b.lox"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Usage: loxc [script]"));
}

#[test]
fn unknown_option_exits_64() {
    loxc()
        .arg("--tokens")
        .assert()
        .code(64)
        .stderr(predicate::str::starts_with("error: unknown option '--tokens'"));
}

#[test]
fn unreadable_script_exits_64() {
    let dir = tempfile::tempdir().unwrap();
    loxc()
        .arg(dir.path().join("missing.lox"))
        .assert()
        .code(64)
        .stderr(predicate::str::starts_with("error: could not read"));
}

#[test]
fn prompt_reads_stdin_until_blank_line() {
    // Errors at the prompt do not change the exit status.
    loxc()
        .arg("--color=never")
        .write_stdin("or ~\n\nnever scanned\n")
        .assert()
        .success()
        .stdout("> OR or\nEOF \n> ")
        .stderr("[line 1:4] Error[E0002]: Unexpected character\n");
}

#[test]
fn prompt_exits_on_end_of_input() {
    loxc()
        .write_stdin("")
        .assert()
        .success()
        .stdout("> ");
}

#[test]
fn help_and_version() {
    loxc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: loxc [script]\n"));

    loxc()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "loxc {}\n",
            env!("CARGO_PKG_VERSION")
        )));
}
