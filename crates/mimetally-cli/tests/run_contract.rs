use std::path::{Path, PathBuf};
use std::process::Command;
use std::{fs, str};

use tempfile::tempdir;

fn cli_bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mimetally"))
}

fn write_fixture(root: &Path) {
    fs::write(
        root.join("mimeTypes.csv"),
        "extension,mime_type\njpg,image/jpeg\n",
    )
    .expect("write mapping");
    fs::write(
        root.join("prod-us-only-mime-types-counts.csv"),
        "entry,count\nimage/jpeg,10\ntestJPG,4\nweirdstuff,1\n",
    )
    .expect("write counts");
}

#[test]
fn bare_run_writes_reports_and_prints_the_summary_lines() {
    let root = tempdir().expect("tempdir");
    write_fixture(root.path());

    let output = Command::new(cli_bin_path())
        .current_dir(root.path())
        .output()
        .expect("spawn cli");
    assert!(output.status.success(), "run must succeed");

    let stdout = str::from_utf8(&output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("Sum of counts for possible mime type matches for us-only: 4"));
    assert!(stdout.contains("Sum of counts for valid mime type matches for us-only: 10"));
    assert!(stdout.contains("Sum of counts for invalid mime type matches for us-only: 1"));
    assert!(stdout.contains("File not found: prod-eu-only-mime-types-counts.csv"));
    assert!(stdout.contains("File not found: prod-global-mime-types-counts.csv"));
    assert!(stdout.contains("Total count across all files: 15"));

    assert!(root.path().join("mime-type-mapping-US.csv").is_file());
    assert!(root.path().join("valid-mime-type-mapping-US.csv").is_file());
    assert!(root.path().join("invalid-mime-type-mapping-US.csv").is_file());
}

#[test]
fn run_json_emits_a_machine_readable_summary() {
    let root = tempdir().expect("tempdir");
    write_fixture(root.path());

    let output = Command::new(cli_bin_path())
        .current_dir(root.path())
        .args(["run", "--json"])
        .output()
        .expect("spawn cli");
    assert!(output.status.success(), "run --json must succeed");

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json summary");
    assert_eq!(summary["total_count"], 15);
    assert_eq!(summary["environments"][0]["environment"], "us-only");
    assert_eq!(summary["environments"][0]["valid_sum"], 10);
    assert_eq!(summary["environments"][1]["found"], false);
}

#[test]
fn missing_mapping_file_fails_with_nonzero_status() {
    let root = tempdir().expect("tempdir");

    let output = Command::new(cli_bin_path())
        .current_dir(root.path())
        .output()
        .expect("spawn cli");
    assert!(!output.status.success(), "run without mapping must fail");

    let stderr = str::from_utf8(&output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("mimeTypes.csv"));
}

#[test]
fn sum_prints_the_cross_check_total_for_one_file() {
    let root = tempdir().expect("tempdir");
    write_fixture(root.path());

    let output = Command::new(cli_bin_path())
        .current_dir(root.path())
        .args(["sum", "prod-us-only-mime-types-counts.csv"])
        .output()
        .expect("spawn cli");
    assert!(output.status.success(), "sum must succeed");
    assert_eq!(str::from_utf8(&output.stdout).expect("utf8 stdout").trim(), "15");
}

#[test]
fn classify_reports_the_bucket_for_a_single_label() {
    let root = tempdir().expect("tempdir");
    write_fixture(root.path());

    let output = Command::new(cli_bin_path())
        .current_dir(root.path())
        .args(["classify", "testJPG"])
        .output()
        .expect("spawn cli");
    assert!(output.status.success(), "classify must succeed");

    let classification: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json classification");
    assert_eq!(classification["entry"], "testJPG");
    assert_eq!(classification["bucket"], "potential");
    assert_eq!(classification["mime"], "image/jpeg");
}
