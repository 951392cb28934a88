//! People in the registry: the [`Person`] capability and its two variants.
//!
//! Students and instructors share validated contact details ([`PersonInfo`])
//! and differ in how they relate to courses. Relationships are stored as
//! course codes, not references; the registry owns every entity.

use std::fmt;

use serde::Serialize;

use crate::course::Course;
use crate::error::ValidationError;
use crate::types::{CourseCode, InstructorId, Role, StudentId};
use crate::validation::{validate_email, validate_name};

// ---------------------------------------------------------------------------
// Shared details
// ---------------------------------------------------------------------------

/// Validated name and email shared by every person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonInfo {
    name: String,
    email: String,
}

impl PersonInfo {
    pub fn new(name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?,
            email: validate_email(email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// On error the previous name is kept.
    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    /// On error the previous email is kept.
    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = validate_email(email)?;
        Ok(())
    }
}

/// Point-in-time detail view of a person, produced by [`Person::profile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub role: Role,
    pub name: String,
    pub email: String,
    pub id: String,
    pub courses: Vec<CourseCode>,
}

/// Behaviour common to students and instructors.
pub trait Person {
    fn info(&self) -> &PersonInfo;

    fn id(&self) -> &str;

    fn role(&self) -> Role;

    /// Courses this person is linked to: enrolled for students, assigned for
    /// instructors.
    fn course_codes(&self) -> &[CourseCode];

    fn name(&self) -> &str {
        self.info().name()
    }

    fn email(&self) -> &str {
        self.info().email()
    }

    fn profile(&self) -> Profile {
        Profile {
            role: self.role(),
            name: self.name().to_owned(),
            email: self.email().to_owned(),
            id: self.id().to_owned(),
            courses: self.course_codes().to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A student and the courses they are enrolled in. Equality is by id.
#[derive(Debug, Clone)]
pub struct Student {
    info: PersonInfo,
    id: StudentId,
    enrolled_courses: Vec<CourseCode>,
}

impl Student {
    /// Rules are checked in the order name, email, id.
    pub fn new(name: &str, email: &str, id: &str) -> Result<Self, ValidationError> {
        let info = PersonInfo::new(name, email)?;
        Ok(Self {
            info,
            id: StudentId::parse(id)?,
            enrolled_courses: Vec::new(),
        })
    }

    pub fn student_id(&self) -> &StudentId {
        &self.id
    }

    pub fn enrolled_courses(&self) -> &[CourseCode] {
        &self.enrolled_courses
    }

    pub fn enrolled_courses_count(&self) -> usize {
        self.enrolled_courses.len()
    }

    pub fn is_enrolled_in(&self, code: &CourseCode) -> bool {
        self.enrolled_courses.contains(code)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.info.set_name(name)
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.info.set_email(email)
    }

    /// Enroll in `course`, updating both sides of the link or neither.
    ///
    /// The student's own list is checked first, then the course gets the final
    /// say (duplicate or full). The student's list only changes once the
    /// course has accepted.
    pub fn enroll_in_course(&mut self, course: &mut Course) -> bool {
        if self.is_enrolled_in(course.code()) {
            tracing::info!(student = %self.id, course = %course.code(), "already enrolled");
            return false;
        }
        if !course.register_student(&self.id) {
            return false;
        }
        self.enrolled_courses.push(course.code().clone());
        true
    }

    /// Drop `course`, removing the link on both sides. `false` if not enrolled.
    pub fn drop_course(&mut self, course: &mut Course) -> bool {
        let Some(pos) = self.enrolled_courses.iter().position(|c| c == course.code()) else {
            tracing::info!(student = %self.id, course = %course.code(), "not enrolled");
            return false;
        };
        self.enrolled_courses.remove(pos);
        course.remove_student(&self.id);
        tracing::debug!(student = %self.id, course = %course.code(), "course dropped");
        true
    }
}

impl Person for Student {
    fn info(&self) -> &PersonInfo {
        &self.info
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn role(&self) -> Role {
        Role::Student
    }

    fn course_codes(&self) -> &[CourseCode] {
        &self.enrolled_courses
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {} enrolled course(s)",
            self.info.name,
            self.id,
            self.enrolled_courses.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Instructor
// ---------------------------------------------------------------------------

/// An instructor and the courses they teach. Equality is by id.
///
/// Assignment is one-sided: courses do not track their instructors, and
/// there is no limit on how many courses one instructor may take.
#[derive(Debug, Clone)]
pub struct Instructor {
    info: PersonInfo,
    id: InstructorId,
    assigned_courses: Vec<CourseCode>,
}

impl Instructor {
    /// Rules are checked in the order name, email, id.
    pub fn new(name: &str, email: &str, id: &str) -> Result<Self, ValidationError> {
        let info = PersonInfo::new(name, email)?;
        Ok(Self {
            info,
            id: InstructorId::parse(id)?,
            assigned_courses: Vec::new(),
        })
    }

    pub fn instructor_id(&self) -> &InstructorId {
        &self.id
    }

    pub fn assigned_courses(&self) -> &[CourseCode] {
        &self.assigned_courses
    }

    pub fn assigned_courses_count(&self) -> usize {
        self.assigned_courses.len()
    }

    pub fn is_assigned_to(&self, code: &CourseCode) -> bool {
        self.assigned_courses.contains(code)
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.info.set_name(name)
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.info.set_email(email)
    }

    /// `false` if already assigned.
    pub fn assign_course(&mut self, course: &Course) -> bool {
        if self.is_assigned_to(course.code()) {
            tracing::info!(instructor = %self.id, course = %course.code(), "already assigned");
            return false;
        }
        self.assigned_courses.push(course.code().clone());
        tracing::debug!(instructor = %self.id, course = %course.code(), "course assigned");
        true
    }

    /// `false` if not assigned.
    pub fn unassign_course(&mut self, course: &Course) -> bool {
        let Some(pos) = self.assigned_courses.iter().position(|c| c == course.code()) else {
            tracing::info!(instructor = %self.id, course = %course.code(), "not assigned");
            return false;
        };
        self.assigned_courses.remove(pos);
        tracing::debug!(instructor = %self.id, course = %course.code(), "course unassigned");
        true
    }
}

impl Person for Instructor {
    fn info(&self) -> &PersonInfo {
        &self.info
    }

    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn role(&self) -> Role {
        Role::Instructor
    }

    fn course_codes(&self) -> &[CourseCode] {
        &self.assigned_courses
    }
}

impl PartialEq for Instructor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Instructor {}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), {} assigned course(s)",
            self.info.name,
            self.id,
            self.assigned_courses.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
