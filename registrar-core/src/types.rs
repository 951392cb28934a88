//! Identifier newtypes and the person role tag.
//!
//! Identifiers can only be built through `parse`, which runs the matching
//! rule from [`crate::validation`]; there is no way to change one afterwards.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::validation::{validate_course_code, validate_id};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Unique key of a student within the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_id(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique key of an instructor within the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InstructorId(String);

impl InstructorId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_id(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstructorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Normalized (uppercase) course code such as `CS101` or `MATH2000`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_course_code(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which kind of person a [`crate::Person`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

impl Role {
    /// Heading for the id line of a detail view.
    pub fn id_label(self) -> &'static str {
        match self {
            Role::Student => "Student ID",
            Role::Instructor => "Instructor ID",
        }
    }

    /// Heading for the course list of a detail view.
    pub fn courses_label(self) -> &'static str {
        match self {
            Role::Student => "Enrolled Courses",
            Role::Instructor => "Assigned Courses",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "student"),
            Role::Instructor => write!(f, "instructor"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_trimmed() {
        assert_eq!(StudentId::parse(" S001 ").unwrap().as_str(), "S001");
        assert_eq!(InstructorId::parse("I001\n").unwrap().to_string(), "I001");
    }

    #[test]
    fn blank_id_rejected() {
        assert!(StudentId::parse("   ").is_err());
        assert!(InstructorId::parse("").is_err());
    }

    #[test]
    fn course_code_normalized() {
        let code = CourseCode::parse("math2000").unwrap();
        assert_eq!(code.as_str(), "MATH2000");
        assert_eq!(code, CourseCode::parse("MATH2000").unwrap());
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::Student.to_string(), "student");
        assert_eq!(Role::Instructor.id_label(), "Instructor ID");
        assert_eq!(Role::Student.courses_label(), "Enrolled Courses");
    }
}
