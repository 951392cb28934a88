//! In-memory registry of students, instructors and courses.
//!
//! # Ownership
//!
//! The [`Registry`] owns every entity. Students, instructors and courses
//! refer to each other by key (`StudentId`, `CourseCode`), and the registry
//! resolves those keys on the way in (mutations) and on the way out
//! (the `*_for_*` / `*_in_*` helpers).
//!
//! # Outcomes
//!
//! Every mutation returns `bool`. `false` means the operation was refused
//! for an ordinary reason (duplicate key, unknown key, already enrolled,
//! course full) and nothing changed. Lookups return `Option`.

use serde::Serialize;

use crate::course::Course;
use crate::person::{Instructor, Person, Student};
use crate::types::CourseCode;
use crate::validation::trim_field;

/// Read-side totals over the whole registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub students: usize,
    pub instructors: usize,
    pub courses: usize,
    /// Sum of current enrollment over all courses.
    pub enrollments: usize,
}

/// Facade over the three keyed collections. Each collection keeps insertion
/// order and holds at most one entity per key.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // 1. Add
    // -----------------------------------------------------------------------

    /// `false` if a student with the same id is already registered.
    pub fn add_student(&mut self, student: Student) -> bool {
        if self.students.contains(&student) {
            tracing::info!(student = %student.student_id(), "student id already exists");
            return false;
        }
        tracing::debug!(student = %student.student_id(), "student added");
        self.students.push(student);
        true
    }

    /// `false` if an instructor with the same id is already registered.
    pub fn add_instructor(&mut self, instructor: Instructor) -> bool {
        if self.instructors.contains(&instructor) {
            tracing::info!(instructor = %instructor.instructor_id(), "instructor id already exists");
            return false;
        }
        tracing::debug!(instructor = %instructor.instructor_id(), "instructor added");
        self.instructors.push(instructor);
        true
    }

    /// `false` if a course with the same code is already registered.
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.courses.contains(&course) {
            tracing::info!(course = %course.code(), "course code already exists");
            return false;
        }
        tracing::debug!(course = %course.code(), "course added");
        self.courses.push(course);
        true
    }

    // -----------------------------------------------------------------------
    // 2. Lookup
    // -----------------------------------------------------------------------

    pub fn find_student_by_id(&self, id: &str) -> Option<&Student> {
        let id = trim_field(id);
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn find_instructor_by_id(&self, id: &str) -> Option<&Instructor> {
        let id = trim_field(id);
        self.instructors.iter().find(|i| i.id() == id)
    }

    /// Matches the stored (uppercase) code exactly; the key is only trimmed.
    pub fn find_course_by_code(&self, code: &str) -> Option<&Course> {
        let code = trim_field(code);
        self.courses.iter().find(|c| c.code().as_str() == code)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    // -----------------------------------------------------------------------
    // 3. Cross-entity operations
    // -----------------------------------------------------------------------

    /// Enroll a student in a course by key.
    ///
    /// `false` if either key is unknown, or if [`Student::enroll_in_course`]
    /// refuses (already enrolled, course full).
    pub fn register_student_to_course(&mut self, student_id: &str, course_code: &str) -> bool {
        let Some((student, course)) = self.resolve_enrollment(student_id, course_code) else {
            return false;
        };
        student.enroll_in_course(course)
    }

    /// Drop a student from a course by key. `false` if either key is unknown
    /// or the student was not enrolled.
    pub fn drop_student_from_course(&mut self, student_id: &str, course_code: &str) -> bool {
        let Some((student, course)) = self.resolve_enrollment(student_id, course_code) else {
            return false;
        };
        student.drop_course(course)
    }

    /// Assign an instructor to a course by key. `false` if either key is
    /// unknown or the assignment already exists.
    pub fn assign_instructor_to_course(&mut self, instructor_id: &str, course_code: &str) -> bool {
        let Some((instructor, course)) = self.resolve_assignment(instructor_id, course_code) else {
            return false;
        };
        instructor.assign_course(course)
    }

    /// Remove an instructor's assignment by key. `false` if either key is
    /// unknown or the instructor was not assigned.
    pub fn unassign_instructor_from_course(&mut self, instructor_id: &str, course_code: &str) -> bool {
        let Some((instructor, course)) = self.resolve_assignment(instructor_id, course_code) else {
            return false;
        };
        instructor.unassign_course(course)
    }

    // -----------------------------------------------------------------------
    // 4. Key resolution and totals
    // -----------------------------------------------------------------------

    /// Courses a student is enrolled in, in enrollment order.
    pub fn courses_for_student(&self, student_id: &str) -> Option<Vec<&Course>> {
        let student = self.find_student_by_id(student_id)?;
        Some(self.resolve_codes(student.enrolled_courses()))
    }

    /// Courses an instructor is assigned to, in assignment order.
    pub fn courses_for_instructor(&self, instructor_id: &str) -> Option<Vec<&Course>> {
        let instructor = self.find_instructor_by_id(instructor_id)?;
        Some(self.resolve_codes(instructor.assigned_courses()))
    }

    /// Students registered for a course, in registration order.
    pub fn students_in_course(&self, course_code: &str) -> Option<Vec<&Student>> {
        let course = self.find_course_by_code(course_code)?;
        Some(
            course
                .registered_students()
                .iter()
                .filter_map(|id| self.students.iter().find(|s| s.student_id() == id))
                .collect(),
        )
    }

    pub fn summary(&self) -> Summary {
        Summary {
            students: self.students.len(),
            instructors: self.instructors.len(),
            courses: self.courses.len(),
            enrollments: self.courses.iter().map(Course::current_enrollment).sum(),
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn resolve_enrollment(
        &mut self,
        student_id: &str,
        course_code: &str,
    ) -> Option<(&mut Student, &mut Course)> {
        let student_id = trim_field(student_id);
        let Some(student) = self.students.iter_mut().find(|s| s.id() == student_id) else {
            tracing::info!(student = student_id, "student not found");
            return None;
        };
        let course = find_course_mut(&mut self.courses, course_code)?;
        Some((student, course))
    }

    fn resolve_assignment(
        &mut self,
        instructor_id: &str,
        course_code: &str,
    ) -> Option<(&mut Instructor, &Course)> {
        let instructor_id = trim_field(instructor_id);
        let Some(instructor) = self.instructors.iter_mut().find(|i| i.id() == instructor_id) else {
            tracing::info!(instructor = instructor_id, "instructor not found");
            return None;
        };
        let course = find_course_mut(&mut self.courses, course_code)?;
        Some((instructor, &*course))
    }

    fn resolve_codes(&self, codes: &[CourseCode]) -> Vec<&Course> {
        codes
            .iter()
            .filter_map(|code| self.courses.iter().find(|c| c.code() == code))
            .collect()
    }
}

fn find_course_mut<'a>(courses: &'a mut [Course], code: &str) -> Option<&'a mut Course> {
    let code = trim_field(code);
    let found = courses.iter_mut().find(|c| c.code().as_str() == code);
    if found.is_none() {
        tracing::info!(course = code, "course not found");
    }
    found
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Registry {
        let mut reg = Registry::new();
        reg.add_student(Student::new("Alice Johnson", "alice@email.com", "S001").expect("s1"));
        reg.add_student(Student::new("Bob Smith", "bob@email.com", "S002").expect("s2"));
        reg.add_instructor(Instructor::new("Dr. Wilson", "wilson@uni.edu", "I001").expect("i1"));
        reg.add_course(Course::new("CS101", "Intro", 1).expect("c1"));
        reg
    }

    #[test]
    fn duplicate_keys_are_refused() {
        let mut reg = seeded();
        assert!(!reg.add_student(Student::new("Other", "o@email.com", "S001").expect("dup")));
        assert!(!reg.add_instructor(Instructor::new("Other", "o@uni.edu", "I001").expect("dup")));
        assert!(!reg.add_course(Course::new("cs101", "Other", 9).expect("dup")));
        assert_eq!(reg.summary().students, 2);
        assert_eq!(reg.find_student_by_id("S001").map(|s| s.name()), Some("Alice Johnson"));
    }

    #[test]
    fn lookups_miss_softly() {
        let reg = seeded();
        assert!(reg.find_student_by_id("S999").is_none());
        assert!(reg.find_instructor_by_id("I999").is_none());
        assert!(reg.find_course_by_code("CS999").is_none());
        assert!(reg.courses_for_student("S999").is_none());
        assert!(reg.students_in_course("CS999").is_none());
    }

    #[test]
    fn course_lookup_is_exact_on_normalized_code() {
        let reg = seeded();
        assert!(reg.find_course_by_code(" CS101 ").is_some());
        assert!(reg.find_course_by_code("cs101").is_none());
    }

    #[test]
    fn unknown_keys_leave_state_untouched() {
        let mut reg = seeded();
        assert!(!reg.register_student_to_course("S999", "CS101"));
        assert!(!reg.register_student_to_course("S001", "CS999"));
        assert!(!reg.assign_instructor_to_course("I999", "CS101"));
        assert_eq!(reg.summary().enrollments, 0);
        assert!(reg.find_student_by_id("S001").expect("s1").enrolled_courses().is_empty());
    }

    #[test]
    fn resolution_helpers_follow_keys() {
        let mut reg = seeded();
        assert!(reg.register_student_to_course("S001", "CS101"));
        assert!(reg.assign_instructor_to_course("I001", "CS101"));

        let courses = reg.courses_for_student("S001").expect("student");
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].name(), "Intro");

        let students = reg.students_in_course("CS101").expect("course");
        assert_eq!(students[0].id(), "S001");

        let taught = reg.courses_for_instructor("I001").expect("instructor");
        assert_eq!(taught[0].code().as_str(), "CS101");
    }

    #[test]
    fn unassign_roundtrip() {
        let mut reg = seeded();
        assert!(!reg.unassign_instructor_from_course("I001", "CS101"));
        assert!(reg.assign_instructor_to_course("I001", "CS101"));
        assert!(!reg.assign_instructor_to_course("I001", "CS101"));
        assert!(reg.unassign_instructor_from_course("I001", "CS101"));
        assert_eq!(reg.find_instructor_by_id("I001").expect("i1").assigned_courses_count(), 0);
    }

    #[test]
    fn summary_counts_enrollments() {
        let mut reg = seeded();
        reg.add_course(Course::new("MATH200", "Calculus II", 25).expect("c2"));
        reg.register_student_to_course("S001", "CS101");
        reg.register_student_to_course("S001", "MATH200");
        reg.register_student_to_course("S002", "MATH200");
        assert_eq!(
            reg.summary(),
            Summary { students: 2, instructors: 1, courses: 2, enrollments: 3 }
        );
    }
}
