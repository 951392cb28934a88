//! Courses and their capacity-bounded student lists.

use std::fmt;

use crate::error::ValidationError;
use crate::types::{CourseCode, StudentId};
use crate::validation::{validate_capacity, validate_course_name};

/// A course offering.
///
/// Holds the ids of its registered students, never the students themselves;
/// the [`crate::Registry`] resolves ids back to entities. Equality is by code.
#[derive(Debug, Clone)]
pub struct Course {
    code: CourseCode,
    name: String,
    max_students: usize,
    registered_students: Vec<StudentId>,
}

impl Course {
    /// Validate and build a course with no registered students.
    ///
    /// Rules are checked in the order code, name, capacity.
    pub fn new(code: &str, name: &str, max_students: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            code: CourseCode::parse(code)?,
            name: validate_course_name(name)?,
            max_students: validate_capacity(max_students)?,
            registered_students: Vec::new(),
        })
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_students(&self) -> usize {
        self.max_students
    }

    /// Registered students in registration order.
    pub fn registered_students(&self) -> &[StudentId] {
        &self.registered_students
    }

    pub fn current_enrollment(&self) -> usize {
        self.registered_students.len()
    }

    pub fn seats_remaining(&self) -> usize {
        self.max_students.saturating_sub(self.registered_students.len())
    }

    pub fn is_full(&self) -> bool {
        self.registered_students.len() >= self.max_students
    }

    pub fn has_student(&self, student: &StudentId) -> bool {
        self.registered_students.contains(student)
    }

    /// Replace the title. On error the old title is kept.
    pub fn set_course_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_course_name(name)?;
        Ok(())
    }

    /// Add `student` to this course's list.
    ///
    /// Returns `false` without changing anything if the student is already
    /// registered or the course is full. Only touches this course; keeping the
    /// student's side in step is [`crate::Student::enroll_in_course`]'s job.
    pub fn register_student(&mut self, student: &StudentId) -> bool {
        if self.has_student(student) {
            tracing::info!(%student, course = %self.code, "student already registered");
            return false;
        }
        if self.is_full() {
            tracing::info!(%student, course = %self.code, max = self.max_students, "course is full");
            return false;
        }
        self.registered_students.push(student.clone());
        tracing::debug!(%student, course = %self.code, "student registered");
        true
    }

    /// Remove `student` from this course's list. `false` if it was not there.
    pub fn remove_student(&mut self, student: &StudentId) -> bool {
        let Some(pos) = self.registered_students.iter().position(|s| s == student) else {
            tracing::info!(%student, course = %self.code, "student not registered");
            return false;
        };
        self.registered_students.remove(pos);
        tracing::debug!(%student, course = %self.code, "student removed");
        true
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Course {}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    fn sid(raw: &str) -> StudentId {
        StudentId::parse(raw).expect("student id")
    }

    #[test]
    fn new_normalizes_fields() {
        let c = Course::new(" cs101", "  Introduction to Computer Science ", 30).expect("course");
        assert_eq!(c.code().as_str(), "CS101");
        assert_eq!(c.name(), "Introduction to Computer Science");
        assert_eq!(c.max_students(), 30);
        assert_eq!(c.current_enrollment(), 0);
    }

    #[test]
    fn new_reports_first_violation() {
        let err = Course::new("INVALID", "", 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidCourseCode { .. }));

        let err = Course::new("CS101", " ", 0).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: Field::CourseName });

        let err = Course::new("CS101", "Intro", 0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveCapacity { value: 0 });
    }

    #[test]
    fn register_refuses_duplicates_and_overflow() {
        let mut c = Course::new("CS101", "Intro", 2).expect("course");
        assert!(c.register_student(&sid("S001")));
        assert!(!c.register_student(&sid("S001")));
        assert!(c.register_student(&sid("S002")));
        assert!(c.is_full());
        assert!(!c.register_student(&sid("S003")));
        assert_eq!(c.current_enrollment(), 2);
        assert_eq!(c.seats_remaining(), 0);
    }

    #[test]
    fn remove_missing_student_is_soft() {
        let mut c = Course::new("CS101", "Intro", 2).expect("course");
        assert!(!c.remove_student(&sid("S001")));
        c.register_student(&sid("S001"));
        assert!(c.remove_student(&sid("S001")));
        assert!(c.registered_students().is_empty());
    }

    #[test]
    fn rename_keeps_old_title_on_error() {
        let mut c = Course::new("CS101", "Intro", 2).expect("course");
        assert!(c.set_course_name("").is_err());
        assert_eq!(c.name(), "Intro");
        c.set_course_name(" Programming I ").expect("rename");
        assert_eq!(c.name(), "Programming I");
    }

    #[test]
    fn equality_and_display_use_code() {
        let a = Course::new("ENG150", "English Composition", 20).expect("course");
        let b = Course::new("eng150", "Other", 5).expect("course");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "ENG150 - English Composition");
    }
}
