use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::str::contains;

fn tt(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tt").expect("binary");
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn list_on_missing_file_creates_empty_db_and_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.json");

    tt(&db).arg("list").assert().success().stdout("");

    assert_eq!(fs::read_to_string(&db).unwrap(), "[]");
}

#[test]
fn list_prints_labeled_lines_with_separator() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.json");

    tt(&db).args(["add", "buy milk"]).assert().success();

    let assert = tt(&db).arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "ID: 1");
    assert_eq!(lines[1], "Description: buy milk");
    assert_eq!(lines[2], "Status: todo");
    assert!(lines[3].starts_with("Created At: "));
    assert!(lines[4].starts_with("Updated At: "));
    assert_eq!(lines[5], "----------------");
}

#[test]
fn list_filter_returns_exactly_the_matching_subset_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.json");

    for desc in ["one", "two", "three", "four"] {
        tt(&db).args(["add", desc]).assert().success();
    }
    tt(&db).args(["mark-done", "1"]).assert().success();
    tt(&db).args(["mark-done", "3"]).assert().success();
    tt(&db).args(["mark-in-progress", "2"]).assert().success();

    let assert = tt(&db).args(["list", "done"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("ID: "))
        .collect();
    assert_eq!(ids, vec!["ID: 1", "ID: 3"]);
    assert!(!stdout.contains("Description: two"));
    assert!(!stdout.contains("Description: four"));

    let assert = tt(&db).args(["list", "todo"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Description: four"));
    assert!(!stdout.contains("Description: one"));
}

#[test]
fn list_with_empty_filter_result_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.json");

    tt(&db).args(["add", "buy milk"]).assert().success();

    tt(&db)
        .args(["list", "in-progress"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn list_rejects_an_unknown_filter() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.json");

    tt(&db)
        .args(["list", "pending"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("pending"));
}

#[test]
fn list_preserves_collection_order_from_a_hand_edited_file() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.json");

    // Ids out of order on disk: list shows them as stored, only add re-sorts.
    fs::write(
        &db,
        r#"[
  {
    "id": 2,
    "description": "second",
    "status": "todo",
    "createdAt": "2026-01-01T00:00:00.000Z",
    "updatedAt": "2026-01-01T00:00:00.000Z"
  },
  {
    "id": 1,
    "description": "first",
    "status": "todo",
    "createdAt": "2026-01-01T00:00:00.000Z",
    "updatedAt": "2026-01-01T00:00:00.000Z"
  }
]"#,
    )
    .unwrap();

    let assert = tt(&db).arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("ID: "))
        .collect();
    assert_eq!(ids, vec!["ID: 2", "ID: 1"]);

    // An add re-establishes ascending order and assigns max+1.
    tt(&db)
        .args(["add", "third"])
        .assert()
        .success()
        .stdout(contains("(ID: 3)"));
    let assert = tt(&db).arg("list").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("ID: "))
        .collect();
    assert_eq!(ids, vec!["ID: 1", "ID: 2", "ID: 3"]);
}
