use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PAGE: &str = "div1 class = \"window\":\n    << \"hello\"\n";
const PAGE_HTML: &str = "<div1 class='window'>\nhello\n</div1>";

fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write source");
    path
}

#[test]
fn writes_html_next_to_source() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);

    cargo_bin_cmd!("pyhtml").arg(&source).assert().success();

    let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert_eq!(html, PAGE_HTML);
}

#[test]
fn writes_to_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);
    let target = dir.path().join("out.htm");

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg(&target)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(target).unwrap(), PAGE_HTML);
    assert!(!dir.path().join("page.html").exists());
}

#[test]
fn prints_html_with_stdout_flag() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg("--stdout")
        .assert()
        .success()
        .stdout(PAGE_HTML);

    assert!(!dir.path().join("page.html").exists());
}

#[test]
fn emits_tokens_as_json() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg("--emit")
        .arg("tokens")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"kind\": \"ELEMENT_NAME\"")
                .and(predicate::str::contains("\"lexeme\": \"window\"")),
        );
}

#[test]
fn emits_tree_and_ast() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg("--emit")
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ div1").and(predicate::str::contains("¶ hello")));

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg("--emit")
        .arg("ast")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"type\": \"attribute\"")
                .and(predicate::str::contains("\"tag\": \"div1\"")),
        );
}

#[test]
fn reports_syntax_errors_with_position() {
    let dir = TempDir::new().unwrap();
    let source = write_source(
        dir.path(),
        "broken.pyhtml",
        "div1:\n    div2:\n        class =\n        div3:\n",
    );

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: unexpected token at line 4, position 9",
        ));

    assert!(!dir.path().join("broken.html").exists());
}

#[test]
fn reports_missing_input() {
    let dir = TempDir::new().unwrap();

    cargo_bin_cmd!("pyhtml")
        .arg(dir.path().join("missing.pyhtml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read"));
}

#[test]
fn applies_config_file() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);
    let config = write_source(
        dir.path(),
        "pyhtml.toml",
        "[output]\nextension = \"htm\"\ntrailing_newline = true\n",
    );

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("page.htm")).unwrap();
    assert_eq!(html, format!("{PAGE_HTML}\n"));
}

#[test]
fn rejects_unknown_emit_value() {
    cargo_bin_cmd!("pyhtml")
        .arg("page.pyhtml")
        .arg("--emit")
        .arg("pdf")
        .assert()
        .failure();
}

#[test]
fn picks_up_project_config_next_to_source() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);
    write_source(dir.path(), "pyhtml.toml", "[output]\nextension = \"xhtml\"\n");

    cargo_bin_cmd!("pyhtml").arg(&source).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("page.xhtml")).unwrap(),
        PAGE_HTML
    );
    assert!(!dir.path().join("page.html").exists());
}

#[test]
fn explicit_config_replaces_project_config() {
    let dir = TempDir::new().unwrap();
    let source = write_source(dir.path(), "page.pyhtml", PAGE);
    write_source(dir.path(), "pyhtml.toml", "[output]\nextension = \"xhtml\"\n");
    let explicit = write_source(dir.path(), "other.toml", "[output]\nextension = \"htm\"\n");

    cargo_bin_cmd!("pyhtml")
        .arg(&source)
        .arg("--config")
        .arg(&explicit)
        .assert()
        .success();

    assert!(dir.path().join("page.htm").exists());
    assert!(!dir.path().join("page.xhtml").exists());
}
