//! Integration tests for the umacard CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn umacard() -> Command {
    Command::cargo_bin("umacard").expect("binary builds")
}

fn init_document(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("card.json");
    umacard().arg("init").arg(&path).assert().success();
    path
}

#[test]
fn init_creates_default_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    let text = fs::read_to_string(&path).expect("read document");
    let json: Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json["mode"], "fictional");
    assert_eq!(json["fictional"]["affiliationSelect"], "美浦");
    assert_eq!(json["races"], serde_json::json!([]));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    umacard()
        .arg("init")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    umacard()
        .arg("init")
        .arg(&path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn add_prepends_and_stats_reflect_it() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    umacard()
        .args(["add"])
        .arg(&path)
        .args(["--name", "皐月賞", "--rank", "1", "--prize", "12000"])
        .assert()
        .success();
    umacard()
        .args(["add"])
        .arg(&path)
        .args(["--name", "日本ダービー", "--rank", "2", "--prize", "8000"])
        .assert()
        .success();

    let json: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(json["races"][0]["name"], "日本ダービー");
    assert_eq!(json["races"][1]["name"], "皐月賞");
    assert_eq!(json["fictional"]["totalResults"], "2戦1勝 [1-1-0-0]");

    umacard()
        .arg("stats")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2戦1勝 [1-1-0-0]"))
        .stdout(predicate::str::contains("2億円"));
}

#[test]
fn add_rejects_invalid_entry() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    umacard()
        .args(["add"])
        .arg(&path)
        .args(["--rank", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finishing position"));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(json["races"], serde_json::json!([]));
}

#[test]
fn remove_deletes_by_index() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    umacard()
        .args(["add"])
        .arg(&path)
        .args(["--name", "A"])
        .assert()
        .success();
    umacard()
        .args(["remove"])
        .arg(&path)
        .arg("0")
        .assert()
        .success();

    let json: Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(json["races"], serde_json::json!([]));
}

#[test]
fn remove_out_of_range_fails() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    umacard()
        .args(["remove"])
        .arg(&path)
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn validate_reports_bad_entries() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("card.json");
    fs::write(
        &path,
        r#"{"races":[{"rank":"1"},{"pop":"0","prize":"-5"}]}"#,
    )
    .expect("write");

    umacard()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("entry 1"))
        .stdout(predicate::str::contains("popularity"))
        .stdout(predicate::str::contains("prize money"));
}

#[test]
fn validate_passes_clean_document() {
    let dir = TempDir::new().expect("temp dir");
    let path = init_document(&dir);

    umacard()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 race entries OK"));
}

#[test]
fn show_prints_loaded_biography() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("card.json");
    fs::write(
        &path,
        r#"{"mode":"original","original":{"name":"テスト","ear":"左","grade":"高等部","dormSelect":"栗東"},"races":[]}"#,
    )
    .expect("write");

    umacard()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("テスト"))
        .stdout(predicate::str::contains("高等部"));
}

#[test]
fn show_fails_on_garbage() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{oops").expect("write");

    umacard()
        .arg("show")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
