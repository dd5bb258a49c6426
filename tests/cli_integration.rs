use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn roster(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_search_update_flow() {
    let home = TempDir::new().unwrap();

    roster(&home)
        .args(["add", "1", "Jane Doe", "20", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added: 1 Jane Doe"));
    roster(&home)
        .args(["add", "2", "John Roe", "21", "B"])
        .assert()
        .success();

    roster(&home)
        .args(["search", "doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("John Roe").not());

    roster(&home)
        .args(["update", "1", "grade", "A+"])
        .assert()
        .success();

    roster(&home)
        .args(["search", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A+"));
}

#[test]
fn test_empty_store_lists_nothing() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
    assert!(!home.path().join("data.json").exists());
}

#[test]
fn test_non_numeric_age_is_rejected() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["add", "1", "Jane Doe", "twenty", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("age must be a non-negative whole number"));
    assert!(!home.path().join("data.json").exists());
}

#[test]
fn test_update_student_id_is_rejected() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["add", "1", "Jane Doe", "20", "A"])
        .assert()
        .success();
    roster(&home)
        .args(["update", "1", "student_id", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("student_id cannot be updated"));
}

#[test]
fn test_update_missing_id_warns_but_succeeds() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["add", "1", "Jane Doe", "20", "A"])
        .assert()
        .success();
    roster(&home)
        .args(["update", "7", "grade", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No student with id 7"));
}

#[test]
fn test_corrupt_file_fails() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("data.json"), "{oops").unwrap();
    roster(&home)
        .args(["search", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid list of students"));
}

#[test]
fn test_stats() {
    let home = TempDir::new().unwrap();
    for (id, age) in [("1", "18"), ("2", "20"), ("3", "22")] {
        roster(&home)
            .args(["add", id, "Student", age, "B"])
            .assert()
            .success();
    }
    roster(&home)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("20.00"));
}

#[test]
fn test_config_changes_data_file() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["config", "data-file", "students.json"])
        .assert()
        .success();
    roster(&home)
        .args(["config", "data-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file = students.json"));
    roster(&home)
        .args(["add", "1", "Jane Doe", "20", "A"])
        .assert()
        .success();
    assert!(home.path().join("students.json").exists());
    assert!(!home.path().join("data.json").exists());
}

#[test]
fn test_log_to_file() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["config", "log-to-file", "true"])
        .assert()
        .success();
    fs::write(home.path().join("data.json"), "{oops").unwrap();
    roster(&home).args(["list"]).assert().failure();

    let log = fs::read_to_string(home.path().join("log.txt")).unwrap();
    assert!(log.contains("records file is malformed"));
}

#[test]
fn test_failures_are_written_to_log_file() {
    let home = TempDir::new().unwrap();
    roster(&home)
        .args(["config", "log-to-file", "true"])
        .assert()
        .success();
    roster(&home)
        .args(["add", "1", "Jane Doe", "20", "A"])
        .assert()
        .success();
    roster(&home)
        .args(["update", "1", "student_id", "9"])
        .assert()
        .failure();
    roster(&home)
        .args(["update", "1", "age", "99999999999999999999"])
        .assert()
        .failure();

    let log = fs::read_to_string(home.path().join("log.txt")).unwrap();
    assert!(log.contains("student_id cannot be updated"));
    assert!(log.contains("age 99999999999999999999 is out of range"));
}

#[test]
fn test_defaults_to_dot_roster_in_working_dir() {
    let cwd = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.current_dir(cwd.path())
        .env_remove("ROSTER_HOME")
        .env("NO_COLOR", "1")
        .args(["add", "1", "Jane Doe", "20", "A"])
        .assert()
        .success();
    assert!(cwd.path().join(".roster").join("data.json").exists());
}
