use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn notesbook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("notesbook").unwrap();
    cmd.env("NOTESBOOK_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_list_and_search() {
    let home = TempDir::new().unwrap();

    notesbook(&home)
        .args(["add", "hello I'm the first note", "-t", "#inc", "-t", "#text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: 1"));

    notesbook(&home)
        .args(["add", "hello I'm the second note", "--tag", "#digit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: 2"));

    notesbook(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("first note"))
        .stdout(predicate::str::contains("second note"));

    notesbook(&home)
        .args(["search", "#digit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second note"))
        .stdout(predicate::str::contains("first note").not());
}

#[test]
fn test_file_format_on_disk() {
    let home = TempDir::new().unwrap();

    notesbook(&home)
        .args(["add", "remember the milk", "-t", "#shop"])
        .assert()
        .success();

    let content = fs::read_to_string(home.path().join("data_note.json")).unwrap();
    let data: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        data,
        serde_json::json!({"1": {"Tags": ["#shop"], "Note": "remember the milk"}})
    );
}

#[test]
fn test_ids_continue_across_runs() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("data_note.json"),
        r##"{"41": {"Tags": [], "Note": "restored"}}"##,
    )
    .unwrap();

    notesbook(&home)
        .args(["add", "fresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note created: 42"));
}

#[test]
fn test_tag_untag_edit_delete() {
    let home = TempDir::new().unwrap();
    notesbook(&home).args(["add", "draft"]).assert().success();

    notesbook(&home)
        .args(["tag", "1", "#a", "#b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag #b added to note 1"));

    notesbook(&home)
        .args(["untag", "1", "#a"])
        .assert()
        .success();

    notesbook(&home)
        .args(["edit", "1", "final"])
        .assert()
        .success();

    notesbook(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("final"))
        .stdout(predicate::str::contains("#b"))
        .stdout(predicate::str::contains("#a").not());

    notesbook(&home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted: 1"));

    notesbook(&home)
        .args(["view", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_validation_errors_exit_nonzero() {
    let home = TempDir::new().unwrap();

    notesbook(&home)
        .args(["add", "body", "-t", "nohash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tag must start with '#'"));

    notesbook(&home).args(["add", "body", "-t", "#x"]).assert().success();

    notesbook(&home)
        .args(["tag", "1", "#x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate tag"));

    notesbook(&home)
        .args(["untag", "1", "#missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_config_switches_notes_file() {
    let home = TempDir::new().unwrap();

    notesbook(&home)
        .args(["config", "notes-file", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes-file set to work.json"));

    notesbook(&home).args(["add", "at work"]).assert().success();
    assert!(home.path().join("work.json").exists());
    assert!(!home.path().join("data_note.json").exists());

    notesbook(&home)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("work.json"));
}

#[test]
fn test_config_unknown_key_fails() {
    let home = TempDir::new().unwrap();

    notesbook(&home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    notesbook(&home)
        .args(["config", "colour"])
        .assert()
        .failure();
    assert!(!home.path().join("config.json").exists());
}
