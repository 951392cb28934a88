//! YAML roster files used to seed a [`Registry`].
//!
//! # Format
//!
//! ```yaml
//! students:
//!   - { name: Alice Johnson, email: alice@email.com, id: S001 }
//! instructors:
//!   - { name: Dr. John Wilson, email: wilson@university.edu, id: I001 }
//! courses:
//!   - { code: CS101, name: Introduction to Computer Science, max_students: 30 }
//! enrollments:
//!   - { student: S001, course: CS101 }
//! assignments:
//!   - { instructor: I001, course: CS101 }
//! ```
//!
//! Every section is optional. Rosters are input only; nothing is written back.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::{RosterError, ValidationError};
use crate::person::{Instructor, Student};
use crate::registry::Registry;
use crate::validation::trim_field;

// ---------------------------------------------------------------------------
// File shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: String,
    pub email: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub name: String,
    pub max_students: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentEntry {
    pub student: String,
    pub course: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub instructor: String,
    pub course: String,
}

/// Parsed but not yet validated roster.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub students: Vec<PersonEntry>,
    #[serde(default)]
    pub instructors: Vec<PersonEntry>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentEntry>,
    #[serde(default)]
    pub assignments: Vec<AssignmentEntry>,
}

// ---------------------------------------------------------------------------
// Apply report
// ---------------------------------------------------------------------------

/// Kind of step replayed from a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    AddStudent,
    AddInstructor,
    AddCourse,
    Enroll,
    Assign,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AddStudent => write!(f, "add student"),
            Action::AddInstructor => write!(f, "add instructor"),
            Action::AddCourse => write!(f, "add course"),
            Action::Enroll => write!(f, "enroll"),
            Action::Assign => write!(f, "assign"),
        }
    }
}

/// Result of one replayed step. `applied == false` is a soft refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub action: Action,
    /// Student id, instructor id or course code the step was about.
    pub subject: String,
    /// Target course for enroll / assign steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub applied: bool,
}

/// Every step replayed by [`Roster::build`], in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ApplyReport {
    pub outcomes: Vec<Outcome>,
}

impl ApplyReport {
    pub fn applied_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.applied).count()
    }

    pub fn refused(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.applied)
    }

    fn record(&mut self, action: Action, subject: &str, course: Option<&str>, applied: bool) {
        self.outcomes.push(Outcome {
            action,
            subject: trim_field(subject).to_owned(),
            course: course.map(|c| trim_field(c).to_owned()),
            applied,
        });
    }
}

// ---------------------------------------------------------------------------
// Load / build
// ---------------------------------------------------------------------------

/// Read and parse a roster file.
///
/// Returns `RosterError::RosterNotFound` if absent,
/// `RosterError::Parse` (with path + line context) if malformed YAML.
pub fn load_roster_at(path: &Path) -> Result<Roster, RosterError> {
    if !path.exists() {
        return Err(RosterError::RosterNotFound { path: path.to_path_buf() });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| RosterError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

impl Roster {
    /// Validate every entity, then replay enrollments and assignments.
    ///
    /// The first entity that fails validation aborts the build. Duplicate
    /// keys, unknown keys and full courses are recorded in the report.
    pub fn build(&self) -> Result<(Registry, ApplyReport), RosterError> {
        let mut registry = Registry::new();
        let mut report = ApplyReport::default();

        for entry in &self.students {
            let student = Student::new(&entry.name, &entry.email, &entry.id)
                .map_err(invalid("student", &entry.id))?;
            let applied = registry.add_student(student);
            report.record(Action::AddStudent, &entry.id, None, applied);
        }
        for entry in &self.instructors {
            let instructor = Instructor::new(&entry.name, &entry.email, &entry.id)
                .map_err(invalid("instructor", &entry.id))?;
            let applied = registry.add_instructor(instructor);
            report.record(Action::AddInstructor, &entry.id, None, applied);
        }
        for entry in &self.courses {
            let course = Course::new(&entry.code, &entry.name, entry.max_students)
                .map_err(invalid("course", &entry.code))?;
            let applied = registry.add_course(course);
            report.record(Action::AddCourse, &entry.code, None, applied);
        }

        for entry in &self.enrollments {
            let applied = registry.register_student_to_course(&entry.student, &entry.course);
            report.record(Action::Enroll, &entry.student, Some(&entry.course), applied);
        }
        for entry in &self.assignments {
            let applied = registry.assign_instructor_to_course(&entry.instructor, &entry.course);
            report.record(Action::Assign, &entry.instructor, Some(&entry.course), applied);
        }

        tracing::debug!(
            steps = report.outcomes.len(),
            applied = report.applied_count(),
            "roster applied"
        );
        Ok((registry, report))
    }
}

fn invalid<'a>(kind: &'a str, key: &'a str) -> impl FnOnce(ValidationError) -> RosterError + 'a {
    move |source| RosterError::Invalid {
        entity: format!("{kind} '{}'", trim_field(key)),
        source,
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
students:
  - { name: Alice Johnson, email: alice@email.com, id: S001 }
  - { name: Bob Smith, email: bob@email.com, id: S002 }
courses:
  - { code: cs101, name: Intro, max_students: 1 }
enrollments:
  - { student: S001, course: CS101 }
  - { student: S002, course: CS101 }
"#;

    #[test]
    fn missing_sections_default_to_empty() {
        let roster: Roster = serde_yaml::from_str("students: []\n").expect("parse");
        assert!(roster.courses.is_empty());
        let (registry, report) = roster.build().expect("build");
        assert_eq!(registry.summary().students, 0);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn build_records_soft_refusals() {
        let roster: Roster = serde_yaml::from_str(SMALL).expect("parse");
        let (registry, report) = roster.build().expect("build");
        assert_eq!(registry.summary().enrollments, 1);
        let refused: Vec<_> = report.refused().collect();
        assert_eq!(refused.len(), 1);
        assert_eq!(refused[0].action, Action::Enroll);
        assert_eq!(refused[0].subject, "S002");
        assert_eq!(refused[0].course.as_deref(), Some("CS101"));
    }

    #[test]
    fn invalid_entity_aborts_build() {
        let roster = Roster {
            courses: vec![CourseEntry {
                code: "INVALID".to_string(),
                name: "Invalid Course".to_string(),
                max_students: 10,
            }],
            ..Roster::default()
        };
        let err = roster.build().unwrap_err();
        assert!(matches!(
            err,
            RosterError::Invalid { source: ValidationError::InvalidCourseCode { .. }, .. }
        ));
        assert!(err.to_string().contains("course 'INVALID'"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let err = load_roster_at(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, RosterError::RosterNotFound { .. }));
    }
}
