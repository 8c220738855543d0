use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{DICTIONARY, DICTIONARY_TABLE, UNICODE_DATA, write_source};

fn zx_tablegen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_zx-tablegen"))
}

#[test]
fn shows_help() {
    zx_tablegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ai-infos").and(predicate::str::contains("iswgraph")));
}

#[test]
fn shows_version() {
    zx_tablegen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn ai_infos_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "dict.txt", DICTIONARY);
    zx_tablegen()
        .args(["ai-infos", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(DICTIONARY_TABLE);
}

#[test]
fn ai_infos_from_stdin_with_tab() {
    zx_tablegen()
        .args(["ai-infos", "-f", "-", "-t", "    "])
        .write_stdin("00  N2\n01-05  N1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("    { \"00\", 2 },\n    { \"01\", 1 },"))
        .stdout(predicate::str::contains("\n    { \"05\", 1 },\n"));
}

#[test]
fn ai_infos_tab_escape() {
    zx_tablegen()
        .args(["ai-infos", "-f", "-", "--tab", r"\t\t"])
        .write_stdin("00  N2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\t\t{ \"00\", 2 },"));
}

#[test]
fn ai_infos_bad_line_fails_without_output() {
    zx_tablegen()
        .args(["ai-infos", "-f", "-"])
        .write_stdin("00  N2\n01  ?? bogus\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("line 2")));
}

#[test]
fn ai_infos_rejects_newline_indent() {
    zx_tablegen()
        .args(["ai-infos", "-f", "-", "--tab", "\n"])
        .write_stdin("00  N2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line break"));
}

#[test]
fn iswgraph_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "UnicodeData.txt", UNICODE_DATA);
    zx_tablegen()
        .args(["iswgraph", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("static const unsigned char zx_graph_bmp[193] = {"))
        .stdout(predicate::str::contains("static const unsigned char zx_graph_1[536] = {"))
        .stdout(predicate::str::contains("return u == 0xE0100 || u == 0xE01EF;"));
}

#[test]
fn iswgraph_warnings_go_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), "UnicodeData.txt", UNICODE_DATA);
    zx_tablegen()
        .args(["iswgraph", "--file"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("revalidate").not())
        .stderr(predicate::str::contains("revalidate skip ranges"));
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    zx_tablegen()
        .args(["iswgraph", "--file"])
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not read source"));
}
