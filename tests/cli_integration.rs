use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cheeper(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cheeper").unwrap();
    cmd.env("CHEEPER_HOME", home.path())
        .env_remove("CHEEPER_STORE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_friend_names_sorted() {
    let home = TempDir::new().unwrap();

    for (login, name) in [("me", "Ann"), ("z", "Zoe"), ("a", "Amy"), ("m", "Mia")] {
        cheeper(&home)
            .args(["create-user", login, name])
            .assert()
            .success();
    }
    for friend in ["z", "a", "m"] {
        cheeper(&home).args(["f", "me", friend]).assert().success();
    }

    cheeper(&home)
        .args(["fn", "me"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("(?s)Amy.*Mia.*Zoe").unwrap());

    cheeper(&home)
        .args(["cf", "me"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_duplicate_friendship_exits_non_zero() {
    let home = TempDir::new().unwrap();
    cheeper(&home).args(["u", "a", "Amy"]).assert().success();
    cheeper(&home).args(["u", "b", "Bob"]).assert().success();
    cheeper(&home).args(["f", "a", "b"]).assert().success();

    cheeper(&home)
        .args(["f", "a", "b"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already friends"));

    cheeper(&home).args(["f", "b", "a"]).assert().success();
}

#[test]
fn test_duplicate_login_exits_non_zero() {
    let home = TempDir::new().unwrap();
    cheeper(&home).args(["u", "amy", "Amy"]).assert().success();
    cheeper(&home)
        .args(["u", "amy", "Amy Again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login already taken: amy"));
}

#[test]
fn test_malformed_window_reported() {
    let home = TempDir::new().unwrap();
    cheeper(&home).args(["u", "amy", "Amy"]).assert().success();

    cheeper(&home)
        .args(["messages", "amy", "16:00 10/12/2021", "16:00 11-12-2021"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed time"));
}

#[test]
fn test_posted_message_found_in_window() {
    let home = TempDir::new().unwrap();
    cheeper(&home).args(["u", "amy", "Amy"]).assert().success();
    cheeper(&home)
        .args(["m", "amy", "hello from the shell"])
        .assert()
        .success();

    cheeper(&home)
        .args(["ms", "amy", "00:00 01-01-2000", "00:00 01-01-2100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from the shell"));
}

#[test]
fn test_test_data_and_benchmarks() {
    let home = TempDir::new().unwrap();
    cheeper(&home)
        .args(["add-test-data", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 5 users"));

    cheeper(&home)
        .args(["cf", "login_0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1"));

    cheeper(&home)
        .args(["bench", "all", "3", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("time writing 1")
                .and(predicate::str::contains("time reading 1")),
        );
}

#[test]
fn test_explicit_store_flag() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let store = other.path().join("alt");

    cheeper(&home)
        .args(["--store", store.to_str().unwrap(), "u", "amy", "Amy"])
        .assert()
        .success();
    assert!(store.join("users.jsonl").exists());

    cheeper(&home)
        .args(["cf", "amy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found: amy"));
}

#[test]
fn test_unusable_store_is_fatal() {
    let home = TempDir::new().unwrap();
    cheeper(&home)
        .args(["--store", "mongodb://localhost:27017/", "cf", "amy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("connect failed"));
}
