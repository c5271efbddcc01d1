// tests/cli_scan.rs - End-to-end runs of the deslop binary
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SLOPPY: &str = "def process_data(value):\n    try:\n        return value + 1\n    except:\n        return 0\n";

fn project() -> TempDir {
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(d.path().join("src")).unwrap();
    d
}

fn deslop(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deslop"))
        .args(args)
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("DESLOP_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_scan_json_payload() {
    let d = project();
    fs::write(d.path().join("src/a.py"), SLOPPY).unwrap();
    fs::write(d.path().join("src/clean.py"), "total = 1\n").unwrap();

    let out = deslop(d.path(), &["scan", "src", "--json"]);
    assert_eq!(out.status.code(), Some(0));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["file_count"], 2);
    assert_eq!(v["flagged_file_count"], 1);
    let report = &v["reports"][0];
    assert!(report["path"].as_str().unwrap().ends_with("a.py"));
    assert_eq!(report["score"], 23);
    let codes: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["GENERIC_NAME", "BARE_EXCEPT"]);
}

#[test]
fn test_scan_human_output() {
    let d = project();
    fs::write(d.path().join("src/a.py"), SLOPPY).unwrap();

    let out = deslop(d.path(), &["scan", "src"]);
    let text = stdout(&out);
    assert!(text.contains("Scanned files: 1"));
    assert!(text.contains("Flagged files: 1"));
    assert!(text.contains("Issues by severity: high=1, medium=1"));
    assert!(text.contains("slop_score=23"));
    assert!(text.contains("[HIGH] BARE_EXCEPT (line 4)"));
}

#[test]
fn test_fail_on_threshold() {
    let d = project();
    fs::write(d.path().join("src/a.py"), SLOPPY).unwrap();

    assert_eq!(deslop(d.path(), &["scan", "src", "--fail-on", "high"]).status.code(), Some(2));
    assert_eq!(deslop(d.path(), &["scan", "src", "--fail-on", "low"]).status.code(), Some(2));
    assert_eq!(
        deslop(d.path(), &["scan", "src", "--fail-on", "critical"]).status.code(),
        Some(0)
    );
    assert_eq!(deslop(d.path(), &["scan", "src"]).status.code(), Some(0));
}

#[test]
fn test_invalid_config_exit_code() {
    let d = project();
    fs::write(d.path().join("src/a.py"), "x = 1   \n").unwrap();
    fs::write(d.path().join("deslop.toml"), "[rules]\nduplicate_window = 1\n").unwrap();

    let out = deslop(d.path(), &["rewrite", "src", "--apply"]);
    assert_eq!(out.status.code(), Some(3));
    assert_eq!(fs::read_to_string(d.path().join("src/a.py")).unwrap(), "x = 1   \n");
}

#[test]
fn test_config_file_is_honored() {
    let d = project();
    fs::write(d.path().join("src/a.py"), SLOPPY).unwrap();
    fs::write(d.path().join("src/b.js"), "function helper() {}\n").unwrap();
    fs::write(d.path().join("deslop.toml"), "[scan]\nextensions = [\".js\"]\n").unwrap();

    let out = deslop(d.path(), &["scan", "src", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["file_count"], 1);
}

#[test]
fn test_extensions_flag() {
    let d = project();
    fs::write(d.path().join("src/a.py"), SLOPPY).unwrap();
    fs::write(d.path().join("src/b.js"), "function helper() {}\n").unwrap();

    let out = deslop(d.path(), &["scan", "src", "--json", "--extensions", ".js"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["file_count"], 1);
    assert!(v["reports"][0]["path"].as_str().unwrap().ends_with("b.js"));
}

#[test]
fn test_rewrite_preview_and_apply() {
    let d = project();
    let file = d.path().join("src/a.py");
    fs::write(&file, "# This function returns x\nx = 1\n").unwrap();

    let preview = deslop(d.path(), &["rewrite", "src", "--diff"]);
    assert_eq!(preview.status.code(), Some(0));
    let text = stdout(&preview);
    assert!(text.contains("[preview]"));
    assert!(text.contains("(1 safe changes)"));
    assert!(text.contains("-# This function returns x"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "# This function returns x\nx = 1\n");

    let applied = deslop(d.path(), &["rewrite", "src", "--apply"]);
    assert!(stdout(&applied).contains("[applied]"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "x = 1\n");

    let again = deslop(d.path(), &["rewrite", "src", "--apply"]);
    assert!(stdout(&again).contains("No safe rewrites were necessary."));
}

#[test]
fn test_missing_path_is_an_error() {
    let d = project();
    let out = deslop(d.path(), &["scan", "nowhere"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nowhere"));
}

#[test]
fn test_test_files_skipped_unless_included() {
    let d = project();
    fs::create_dir_all(d.path().join("tests")).unwrap();
    fs::write(d.path().join("tests/test_a.py"), SLOPPY).unwrap();

    let skipped = deslop(d.path(), &["scan", ".", "--json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&skipped)).unwrap();
    assert_eq!(v["file_count"], 0);

    let included = deslop(d.path(), &["scan", ".", "--json", "--include-tests"]);
    let v: serde_json::Value = serde_json::from_str(&stdout(&included)).unwrap();
    assert_eq!(v["file_count"], 1);
}
