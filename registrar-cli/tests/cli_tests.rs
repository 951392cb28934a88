//! End-to-end tests for the `registrar` binary.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn registrar_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("registrar"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn campus() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/campus.yaml")
}

// ---------------------------------------------------------------------------
// 1. demo
// ---------------------------------------------------------------------------

#[test]
fn demo_runs_walkthrough() {
    registrar_cmd()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("Total Enrollments: 4"))
        .stdout(contains("Total Students: 3"))
        .stdout(contains("rejected student: invalid email format"))
        .stdout(contains("rejected course: invalid course code format 'INVALID'"))
        .stdout(contains("Instructor ID: I002"));
}

// ---------------------------------------------------------------------------
// 2. report
// ---------------------------------------------------------------------------

#[test]
fn report_lists_refusals_and_totals() {
    registrar_cmd()
        .arg("report")
        .arg(campus())
        .assert()
        .success()
        .stdout(contains("15 of 16 steps applied"))
        .stdout(contains("enroll S003 -> ENG150"))
        .stdout(contains("1/1"))
        .stdout(contains("Total Enrollments: 4"));
}

#[test]
fn report_json_is_machine_readable() {
    let output = registrar_cmd()
        .args(["report", "--json"])
        .arg(campus())
        .output()
        .expect("run registrar");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["summary"]["enrollments"], 4);
    assert_eq!(json["summary"]["instructors"], 2);
    assert_eq!(json["courses"][2]["code"], "ENG150");
    assert_eq!(json["courses"][2]["students"], "S002");

    let refused: Vec<_> = json["outcomes"]
        .as_array()
        .expect("outcomes array")
        .iter()
        .filter(|o| o["applied"] == false)
        .collect();
    assert_eq!(refused.len(), 1);
    assert_eq!(refused[0]["action"], "enroll");
    assert_eq!(refused[0]["subject"], "S003");
}

#[test]
fn report_on_invalid_roster_fails_with_message() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "courses:\n  - { code: INVALID, name: Invalid Course, max_students: 10 }\n")
        .expect("write");

    registrar_cmd()
        .arg("report")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("invalid entry"))
        .stderr(contains("course 'INVALID'"));
}

#[test]
fn report_on_missing_roster_fails() {
    let dir = TempDir::new().expect("tempdir");
    registrar_cmd()
        .arg("report")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .failure()
        .stderr(contains("roster not found"));
}

// ---------------------------------------------------------------------------
// 3. show
// ---------------------------------------------------------------------------

#[test]
fn show_student_profile() {
    registrar_cmd()
        .arg("show")
        .arg(campus())
        .args(["student", "S001"])
        .assert()
        .success()
        .stdout(contains("Student ID: S001"))
        .stdout(contains("Enrolled Courses: 2"))
        .stdout(contains("MATH200: Calculus II"));
}

#[test]
fn show_instructor_includes_enrollment() {
    registrar_cmd()
        .arg("show")
        .arg(campus())
        .args(["instructor", "I001"])
        .assert()
        .success()
        .stdout(contains("Assigned Courses: 2"))
        .stdout(contains("CS101: Introduction to Computer Science (2/30 students)"));
}

#[test]
fn show_course_accepts_lowercase_code() {
    registrar_cmd()
        .arg("show")
        .arg(campus())
        .args(["course", "eng150"])
        .assert()
        .success()
        .stdout(contains("Enrollment: 1/1"))
        .stdout(contains("Bob Smith (ID: S002)"))
        .stdout(contains("Carol Davis").not());
}

#[test]
fn show_unknown_key_fails() {
    registrar_cmd()
        .arg("show")
        .arg(campus())
        .args(["student", "S404"])
        .assert()
        .failure()
        .stderr(contains("no student with id 'S404'"));
}

#[test]
fn verbose_logs_refusals_to_stderr() {
    registrar_cmd()
        .args(["-v", "report"])
        .arg(campus())
        .assert()
        .success()
        .stderr(contains("course is full"));
}
