mod common;

use assert_cmd::Command;
use common::write_workbook_with_unreadable_sheet;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::TempDir;

fn sheet_inspect() -> Command {
    Command::cargo_bin("sheet-inspect").unwrap()
}

fn sim_upload() -> Command {
    Command::cargo_bin("sim-upload").unwrap()
}

#[test]
fn test_no_arguments_prints_usage() {
    sheet_inspect()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--- Sheets ---").not());
}

#[test]
fn test_missing_file_exits_cleanly() {
    sheet_inspect()
        .arg("x.xlsx")
        .assert()
        .success()
        .stdout(predicate::str::contains("x.xlsx"));
}

#[test]
fn test_columns_and_rows_flags() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.xlsx");

    let mut workbook = XlsxWorkbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Week 1").unwrap();
    sheet.write_string(0, 0, "Day").unwrap();
    sheet.write_string(0, 1, "Lift").unwrap();
    sheet.write_string(1, 0, "Mon").unwrap();
    sheet.write_string(1, 1, "Squat").unwrap();
    sheet.write_string(2, 1, "Press").unwrap();
    sheet.write_string(3, 1, "Row").unwrap();
    workbook.save(&path).unwrap();

    sheet_inspect()
        .arg(&path)
        .args(["--date-column", "Day", "--columns", "Lift,Day", "--rows", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"["Week 1"]"#))
        .stdout(predicate::str::contains("    Lift  Day"))
        .stdout(predicate::str::contains("1  Press  Mon"))
        .stdout(predicate::str::contains("Row").not());
}

#[test]
fn test_unreadable_sheet_stops_without_keep_going() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook_with_unreadable_sheet(dir.path());

    sheet_inspect()
        .arg(&path)
        .args(["--columns", "Exercise"])
        .assert()
        .success()
        .stdout(predicate::str::contains(">>> Sheet: Jan"))
        .stdout(predicate::str::contains("unable to read worksheet 'Feb'"))
        .stdout(predicate::str::contains(">>> Sheet: Mar").not());
}

#[test]
fn test_keep_going_skips_unreadable_sheet() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook_with_unreadable_sheet(dir.path());

    sheet_inspect()
        .arg(&path)
        .args(["--columns", "Exercise", "--keep-going"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped: unable to read worksheet 'Feb'"))
        .stdout(predicate::str::contains(">>> Sheet: Mar"))
        .stdout(predicate::str::contains("Deadlift"));
}

#[test]
fn test_sim_upload_without_sample() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out").join("sim_upload.js");

    sim_upload()
        .arg("--sample")
        .arg(dir.path().join("sample.xlsx"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found"));

    assert!(!output.exists());
}

#[test]
fn test_sim_upload_writes_script() {
    let dir = TempDir::new().unwrap();
    let sample = dir.path().join("sample.xlsx");
    let output = dir.path().join(".tmp").join("sim_upload.js");

    let mut workbook = XlsxWorkbook::new();
    workbook
        .add_worksheet()
        .write_string(0, 0, "운동명")
        .unwrap();
    workbook.save(&sample).unwrap();

    sim_upload()
        .arg("--sample")
        .arg(&sample)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("JS snippet created at"));

    let script = std::fs::read_to_string(&output).unwrap();
    // Zip archives start with "PK\x03\x04", which encodes to "UEsDB"
    assert!(script.contains(r#"const base64 = "UEsDB"#));
    assert!(script.contains("'sample.xlsx'"));
}
