use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn shopcat() -> Command {
    Command::cargo_bin("shopcat").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    shopcat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_list_help_lists_criteria() {
    shopcat()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-price"))
        .stdout(predicate::str::contains("price-asc"));
}

#[test]
fn test_unknown_sort_is_rejected() {
    shopcat()
        .args(["list", "--sort", "rating"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
