//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quiz(data_dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quiz").unwrap();
    cmd.env_remove("QUIZ_COLLECTION")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

#[test]
fn first_run_lists_bundled_groups_and_saves_them() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hiragana"))
        .stdout(predicate::str::contains("not played yet"));

    assert!(dir.path().join("QuestionGroupData.json").is_file());
}

#[test]
fn groups_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Katakana"));
}

#[test]
fn strategy_can_be_changed_and_shown() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .arg("strategy")
        .assert()
        .success()
        .stdout(predicate::str::contains("* sequential"));

    quiz(&dir)
        .args(["strategy", "random"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Random"));

    quiz(&dir)
        .arg("strategy")
        .assert()
        .success()
        .stdout(predicate::str::contains("* random"));
}

#[test]
fn unknown_strategy_is_rejected() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .args(["strategy", "backwards"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("backwards"));
}

#[test]
fn added_group_can_be_played() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .args(["add", "--title", "Colors"])
        .args(["--question", "red|aka", "--question", "blue|ao|sky"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added \"Colors\" with 2 questions"));

    quiz(&dir)
        .args(["play", "Colors"])
        .write_stdin("\ny\n\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] red"))
        .stdout(predicate::str::contains("Done! 1 correct, 1 incorrect (50%)"));

    quiz(&dir)
        .arg("groups")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 correct, 1 incorrect (50%)"));
}

#[test]
fn invalid_group_exits_with_status_2() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .args(["add", "--title", "Broken", "--question", "prompt only"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("question answer cannot be empty"));
}

#[test]
fn playing_unknown_group_fails() {
    let dir = TempDir::new().unwrap();
    quiz(&dir)
        .args(["play", "Nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no question group titled \"Nope\""));
}
