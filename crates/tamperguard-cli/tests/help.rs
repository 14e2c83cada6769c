use assert_cmd::Command;
use predicates::str::contains;

/// Helper to get a Command for the tamperguard binary.
#[allow(deprecated)]
fn tamperguard_cmd() -> Command {
    Command::cargo_bin("tamperguard").unwrap()
}

#[test]
fn help_works() {
    tamperguard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("check"))
        .stdout(contains("diagnose"))
        .stdout(contains("--allow-emulator"));
}

#[test]
fn check_help_lists_options() {
    tamperguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(contains("--facts"))
        .stdout(contains("--collect-all"))
        .stdout(contains("--report-out"));
}

#[test]
fn version_works() {
    tamperguard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("tamperguard"));
}

#[test]
fn check_requires_facts() {
    tamperguard_cmd()
        .arg("check")
        .assert()
        .failure()
        .stderr(contains("--facts"));
}
