//! CLI tests for `gak decode`: key sources, output shapes, and failures.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use assert_cmd::cargo;

const QUEENS_ROAD: &str = "aWQ9NTYgUXVlZW5zIFJvYWR-YWx0X2tleT0zNzgyMjk0Nn5kYXRhc2V0PUFVU19QQUZ-Zm9ybWF0X2tleT1BVVMkYXUtYWRkcmVzcyQ3LjczMDFRQVMyeVBCd01BQWdVQUFRRUFBQUFCYTJibkFBQUFBQUFBQURVMklGRjFaV1Z1Y3lCU2IyRmtBQUFBQUFBLQ";

fn gak_cmd() -> Command {
    Command::new(cargo::cargo_bin!("gak"))
}

fn run_with_stdin(args: &[&str], stdin_body: &str) -> std::process::Output {
    let mut child = gak_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gak command");

    {
        let stdin = child.stdin.as_mut().expect("stdin handle");
        stdin
            .write_all(stdin_body.as_bytes())
            .expect("write stdin body");
    }

    child.wait_with_output().expect("wait for output")
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("invalid json ({e}): {stdout}"))
}

fn field_names(json: &serde_json::Value) -> Vec<String> {
    json["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f["name"].as_str().expect("name").to_string())
        .collect()
}

#[test]
fn decode_json_lists_fields_in_order() {
    let output = gak_cmd()
        .args(["decode", QUEENS_ROAD, "--output", "json"])
        .output()
        .expect("run decode");

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["success"], true);
    assert_eq!(
        field_names(&json),
        ["id", "alt_key", "dataset", "format_key"]
    );
    assert_eq!(json["fields"][0]["value"], "56 Queens Road");
    assert_eq!(json["fields"][0]["length"], 14);
    assert_eq!(json["fields"][1]["value"], "37822946");
}

#[test]
fn decode_reads_stdin_and_trims_whitespace() {
    let body = format!("  {QUEENS_ROAD}\n");
    let output = run_with_stdin(&["decode", "-", "--output", "json"], &body);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(field_names(&json_stdout(&output)).len(), 4);
}

#[test]
fn decode_reads_stdin_when_key_omitted() {
    let output = run_with_stdin(&["decode", "--output", "json"], "YT0xfmI9\n");
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(field_names(&json), ["a", "b"]);
    assert_eq!(json["fields"][1]["value"], "");
    assert_eq!(json["fields"][1]["length"], 0);
}

#[test]
fn decode_reads_key_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("key.txt");
    fs::write(&path, format!("{QUEENS_ROAD}\n")).expect("write key file");

    let output = gak_cmd()
        .args(["decode", "--file"])
        .arg(&path)
        .args(["--output", "json"])
        .output()
        .expect("run decode");

    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["fields"][1]["value"], "37822946");
}

#[test]
fn decode_sample_by_number() {
    let output = gak_cmd()
        .args(["decode", "--sample", "2", "--output", "json"])
        .output()
        .expect("run decode");

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["fields"][1]["value"], "GAQLD155815970");
}

#[test]
fn decode_empty_key_yields_no_fields() {
    let output = run_with_stdin(&["decode", "--output", "json"], "\n");
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["success"], true);
    assert!(json["fields"].as_array().expect("fields").is_empty());
}

#[test]
fn decode_raw_prints_payload() {
    let output = gak_cmd()
        .args(["decode", "YT0xfmI9", "--raw", "--output", "pretty"])
        .output()
        .expect("run decode");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a=1~b=\n");
}

#[test]
fn decode_pretty_shows_value_lengths() {
    let output = gak_cmd()
        .args(["decode", QUEENS_ROAD, "--output", "pretty"])
        .output()
        .expect("run decode");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("56 Queens Road"), "stdout={stdout}");
    assert!(stdout.contains("(14)"), "stdout={stdout}");
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn decode_invalid_character_json_envelope() {
    let output = gak_cmd()
        .args(["decode", "YT0!", "--output", "json"])
        .output()
        .expect("run decode");

    assert!(!output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "decode_failed");
    assert_eq!(json["position"], 3);
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("invalid character")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn decode_invalid_length_json_envelope() {
    let output = gak_cmd()
        .args(["decode", "YT0xf", "--output", "json"])
        .output()
        .expect("run decode");

    assert!(!output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["error"], "decode_failed");
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("length 5")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn decode_invalid_pretty_reports_on_stderr() {
    let output = gak_cmd()
        .args(["decode", "YT0!", "--output", "pretty"])
        .output()
        .expect("run decode");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid character"), "stderr={stderr}");
}
