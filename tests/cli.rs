#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fruit-calendar-cli").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn setup(dir: &Path) {
    fs::write(dir.join("names.txt"), "Apple\nBanana\nCherry\n").unwrap();
    fs::write(
        dir.join("holidays.json"),
        r#"{"holidays": {"12.25": "Christmas"}, "working_days": ["12.15"]}"#,
    )
    .unwrap();
}

#[test]
fn writes_the_html_page() {
    let dir = tempdir().unwrap();
    setup(dir.path());

    cli(dir.path())
        .args([
            "--config",
            "holidays.json",
            "--today",
            "2018-12-03",
            "--out",
            "page.html",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("last name: Cherry"));

    let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert!(html.contains("Fruit Calendar December 2018"));
    assert!(html.contains("<span class=\"day\">25</span><br><span class=\"name\">Christmas</span>"));
}

#[test]
fn next_month_with_overrides_on_stdout() {
    let dir = tempdir().unwrap();
    setup(dir.path());

    cli(dir.path())
        .args([
            "--today",
            "2018-12-10",
            "--month",
            "next",
            "--format",
            "text",
            "--last-name",
            "Cherry",
            "--skip",
            "2",
            "--include-saturdays",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Fruit Calendar January 2019\n 1 Tue Apple\n 2 Wed *\n 3 Thu Banana\n 4 Fri Cherry\n 5 Sat Apple\n",
        ));
}

#[test]
fn unknown_last_name_writes_nothing() {
    let dir = tempdir().unwrap();
    setup(dir.path());

    cli(dir.path())
        .args(["--last-name", "Durian", "--out", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown name in roster: Durian"));

    assert!(!dir.path().join("page.html").exists());
}

#[test]
fn invalid_month_is_rejected() {
    let dir = tempdir().unwrap();
    setup(dir.path());

    cli(dir.path())
        .args(["--month", "later"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parameter month"));
}

#[test]
fn malformed_override_date_is_rejected() {
    let dir = tempdir().unwrap();
    setup(dir.path());

    cli(dir.path())
        .args(["--skip", "12.x", "--out", "page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("12.x"));

    assert!(!dir.path().join("page.html").exists());
}

#[test]
fn missing_names_file_is_reported() {
    let dir = tempdir().unwrap();

    cli(dir.path())
        .args(["--names", "absent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}
