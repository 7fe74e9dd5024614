use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("admin-cli").unwrap()
}

#[test]
fn help_lists_the_admin_surfaces() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("donations"))
        .stdout(predicate::str::contains("feedback"));
}

#[test]
fn invalid_role_is_rejected_by_the_parser() {
    cli()
        .args(["users", "set-role", "--id", "1", "--role", "moderator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user"))
        .stderr(predicate::str::contains("admin"));
}

#[test]
fn donation_status_outside_the_allow_list_is_rejected() {
    // 'cancelled' существует в данных, но не принимается формой
    cli()
        .args(["donations", "set-status", "--id", "3", "--status", "cancelled"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refunded"));
}

#[test]
fn negative_hours_never_reach_the_network() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session");

    // сервер заведомо недостижим: до него дойти и не должны
    cli()
        .args([
            "--server",
            "http://127.0.0.1:9",
            "--session-file",
            session_file.to_str().unwrap(),
            "volunteers",
            "update",
            "--id",
            "1",
            "--status",
            "accepted",
            "--hours=-5",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("non-negative"));
}

#[test]
fn volunteer_status_must_come_from_the_allow_list() {
    cli()
        .args([
            "volunteers",
            "update",
            "--id",
            "1",
            "--status",
            "retired",
            "--hours",
            "4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("applied"));
}
