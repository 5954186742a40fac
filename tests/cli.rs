mod common;

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use common::{output_dir, pdf_page_count, sample_row};

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_applicant-profile"))
}

#[test]
fn row_file_produces_pdf_and_text() {
    let dir = output_dir("cli-row");
    let row_path = dir.join("row.tsv");
    fs::write(&row_path, format!("{}\n", sample_row())).expect("write row");

    let output = cargo_bin()
        .args(["--row", row_path.to_str().unwrap(), "--out-dir", dir.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Command failed: {output:?}");

    let pdf = fs::read(dir.join("CIT_Application_Mohammed_Aslam_Muhammed.pdf")).expect("pdf written");
    assert_eq!(pdf_page_count(&pdf), 2);

    let text = fs::read_to_string(dir.join("CIT_Application_Mohammed_Aslam_Muhammed.txt"))
        .expect("text written");
    assert!(text.contains("Juz Count: 30"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Applicant Name: Mohammed Aslam Muhammed"));
}

#[test]
fn row_from_stdin_with_text_only() {
    let dir = output_dir("cli-stdin");
    let mut child = cargo_bin()
        .args(["--row", "-", "--format", "text", "--out-dir", dir.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(sample_row().as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("command finishes");
    assert!(output.status.success(), "Command failed: {output:?}");

    assert!(dir.join("CIT_Application_Mohammed_Aslam_Muhammed.txt").exists());
    assert!(!dir.join("CIT_Application_Mohammed_Aslam_Muhammed.pdf").exists());
}

#[test]
fn json_entry_with_custom_required_set() {
    let dir = output_dir("cli-json");
    let json_path = dir.join("applicant.json");
    fs::write(
        &json_path,
        r#"{"full_name": "A B", "address": "1 Main St", "mobile": "0771234567",
            "dob": "1 Jan 2000", "parent_name": "C D", "parent_mobile": "0779999999"}"#,
    )
    .expect("write json");

    let output = cargo_bin()
        .args([
            "--json",
            json_path.to_str().unwrap(),
            "--require",
            "full_name,address,mobile,dob,parent_name,parent_mobile",
            "--format",
            "pdf",
            "--out-dir",
            dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Command failed: {output:?}");
    assert!(dir.join("CIT_Application_A_B.pdf").exists());
}

#[test]
fn missing_required_fields_are_listed_and_nothing_is_written() {
    let dir = output_dir("cli-missing");
    let json_path = dir.join("applicant.json");
    fs::write(&json_path, r#"{"full_name": "A B"}"#).expect("write json");

    let output = cargo_bin()
        .args(["--json", json_path.to_str().unwrap(), "--out-dir", dir.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Missing 17 required field(s)"));
    assert!(stderr.contains("• Address"));
    assert!(stderr.contains("• Language(s)Spoken at Home"));
    assert!(!dir.join("CIT_Application_A_B.pdf").exists());
}

#[test]
fn short_row_is_reported() {
    let dir = output_dir("cli-short");
    let row_path = dir.join("row.tsv");
    fs::write(&row_path, "1/3/2026\tA B\t1 Main St").expect("write row");

    let output = cargo_bin()
        .args(["--row", row_path.to_str().unwrap(), "--out-dir", dir.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 27 tab-separated fields, got 3"));
}

#[test]
fn unknown_required_key_is_rejected() {
    let dir = output_dir("cli-unknown");
    let row_path = dir.join("row.tsv");
    fs::write(&row_path, sample_row()).expect("write row");

    let output = cargo_bin()
        .args(["--row", row_path.to_str().unwrap(), "--require", "full_name,shoe_size"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown field key: shoe_size"));
}

#[test]
fn table_style_writes_table_pdf() {
    let dir = output_dir("cli-table");
    let row_path = dir.join("row.tsv");
    fs::write(&row_path, sample_row()).expect("write row");

    let output = cargo_bin()
        .args([
            "--row",
            row_path.to_str().unwrap(),
            "--style",
            "table",
            "--format",
            "pdf",
            "--out-dir",
            dir.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success(), "Command failed: {output:?}");

    let pdf = fs::read(dir.join("CIT_Application_Table_Mohammed_Aslam_Muhammed.pdf"))
        .expect("table pdf written");
    assert!(pdf_page_count(&pdf) >= 1);
    assert!(!dir.join("CIT_Application_Mohammed_Aslam_Muhammed.pdf").exists());
}
