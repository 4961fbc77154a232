//! CLI integration tests for the `casemerge` binary.
//!
//! These run the compiled binary inside a temporary working directory so the
//! default source and destination paths resolve against it.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SOURCE: &str = "id,name,severity\n1,SQLi,high\n2,XSS,medium\n";

fn workdir_with_default_source() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let docs = dir.path().join("docs/phase4-testing");
    fs::create_dir_all(&docs).expect("create docs dir");
    fs::write(docs.join("SECURITY_TEST_CASES.csv"), SOURCE).expect("write source");
    dir
}

fn casemerge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("casemerge").expect("binary exists");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_paths_create_master_file() {
    let dir = workdir_with_default_source();

    casemerge(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Main file does not exist, will create new"))
        .stdout(predicate::str::contains("SUCCESS: Merge completed!"))
        .stdout(predicate::str::contains("Total test cases: 2"))
        .stdout(predicate::str::contains("Backup:").not());

    assert_eq!(
        fs::read_to_string(dir.path().join("X4O_Test_Cases.csv")).expect("read master"),
        SOURCE
    );
}

#[test]
fn second_run_appends_and_reports_backup() {
    let dir = workdir_with_default_source();
    casemerge(&dir).assert().success();

    casemerge(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created: "))
        .stdout(predicate::str::contains("Total test cases: 4"))
        .stdout(predicate::str::contains("X4O_Test_Cases_backup_"));
}

#[test]
fn missing_source_exits_non_zero() {
    let dir = TempDir::new().expect("create temp dir");

    casemerge(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("❌ ERROR: source file not found"))
        .stdout(predicate::str::contains("SUCCESS").not());

    assert!(!dir.path().join("X4O_Test_Cases.csv").exists());
}

#[test]
fn json_summary_on_stdout() {
    let dir = workdir_with_default_source();

    let output = casemerge(&dir)
        .arg("--json")
        .output()
        .expect("run casemerge");

    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(summary["rows_added"], 2);
    assert_eq!(summary["total_rows"], 2);
    assert_eq!(summary["created"], true);
    assert_eq!(summary["dry_run"], false);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = workdir_with_default_source();

    casemerge(&dir)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run completed successfully"));

    assert!(!dir.path().join("X4O_Test_Cases.csv").exists());
}

#[rstest]
#[case("--source")]
#[case("--destination")]
fn explicit_paths_override_defaults(#[case] flag: &str) {
    let dir = workdir_with_default_source();
    fs::write(dir.path().join("other.csv"), SOURCE).expect("write alternate file");

    let (source, destination) = match flag {
        "--source" => ("other.csv", "X4O_Test_Cases.csv"),
        _ => ("docs/phase4-testing/SECURITY_TEST_CASES.csv", "master.csv"),
    };

    casemerge(&dir)
        .args(["--source", source, "--destination", destination])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join(destination)).expect("read destination"),
        SOURCE
    );
}

#[test]
fn config_file_supplies_paths() {
    let dir = workdir_with_default_source();
    fs::write(
        dir.path().join("casemerge.toml"),
        "destination = \"from_config.csv\"\njson = true\n",
    )
    .expect("write config");

    let output = casemerge(&dir)
        .args(["--config", "casemerge.toml"])
        .output()
        .expect("run casemerge");

    assert!(output.status.success());
    assert!(dir.path().join("from_config.csv").exists());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(summary["total_rows"], 2);
}

#[test]
fn generate_config_prints_sample() {
    let dir = TempDir::new().expect("create temp dir");

    casemerge(&dir)
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("destination = \"X4O_Test_Cases.csv\""));
}

#[test]
fn same_source_and_destination_rejected() {
    let dir = workdir_with_default_source();

    casemerge(&dir)
        .args([
            "--destination",
            "docs/phase4-testing/SECURITY_TEST_CASES.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("same file"));
}
