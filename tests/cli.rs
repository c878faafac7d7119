//! End-to-end CLI tests.
//!
//! Each test gets its own HOME so state never leaks between tests or
//! into the developer's real data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn studypal(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("studypal").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn init_creates_profile_and_greets() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["init", "--name", "Robin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robin"));
}

#[test]
fn init_rejects_unknown_character() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["init", "--name", "Robin", "--character", "dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown character"));
}

#[test]
fn quest_add_then_list_shows_countdown() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["quest", "add", "Finish essay", "--due", "2099-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finish essay"));

    studypal(&home)
        .args(["quest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finish essay").and(predicate::str::contains("left")));
}

#[test]
fn quest_add_rejects_bad_date() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["quest", "add", "Essay", "--due", "tomorrow"])
        .assert()
        .failure();
}

#[test]
fn quest_done_unknown_id_fails() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["quest", "done", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn quest_list_supports_json_output() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["quest", "add", "Lab report", "--due", "2099-06-01", "--time", "17:00"])
        .assert()
        .success();

    studypal(&home)
        .args(["-o", "json", "quest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Lab report\""));
}

#[test]
fn schedule_add_then_list_sorted() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["schedule", "add", "Chemistry", "--day", "wed", "--time", "14:00"])
        .assert()
        .success();

    studypal(&home)
        .args(["schedule", "add", "Algebra", "--day", "mon", "--time", "09:30"])
        .assert()
        .success();

    let output = studypal(&home)
        .args(["schedule", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8_lossy(&output);
    let algebra = text.find("Algebra").unwrap();
    let chemistry = text.find("Chemistry").unwrap();
    assert!(algebra < chemistry, "Monday entry should list first");
}

#[test]
fn schedule_add_rejects_bad_day() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["schedule", "add", "Algebra", "--day", "blursday", "--time", "09:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid day"));
}

#[test]
fn reset_all_force_wipes_everything() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["quest", "add", "Essay", "--due", "2099-12-31"])
        .assert()
        .success();

    studypal(&home)
        .args(["reset-all", "--force"])
        .assert()
        .success();

    studypal(&home)
        .args(["quest", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Essay").not());
}

#[test]
fn say_works_without_a_profile() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .arg("say")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn completions_emit_a_bash_script() {
    let home = TempDir::new().unwrap();

    studypal(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("studypal"));
}
