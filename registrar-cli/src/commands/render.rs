//! Console rendering shared by the subcommands.

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use registrar_core::{Course, Person, Registry, Role, Summary};

/// Green tick or red cross for a soft outcome.
pub fn mark(applied: bool) -> String {
    if applied {
        "✓".green().bold().to_string()
    } else {
        "✗".red().bold().to_string()
    }
}

pub fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

/// Detail view of a student or instructor.
pub fn print_profile(registry: &Registry, person: &dyn Person) {
    let profile = person.profile();
    let title = match profile.role {
        Role::Student => "Student Details",
        Role::Instructor => "Instructor Details",
    };
    heading(title);
    println!("Name: {}", profile.name);
    println!("Email: {}", profile.email);
    println!("{}: {}", profile.role.id_label(), profile.id);
    println!("{}: {}", profile.role.courses_label(), profile.courses.len());

    if profile.courses.is_empty() {
        match profile.role {
            Role::Student => println!("No courses enrolled."),
            Role::Instructor => println!("No courses assigned."),
        }
        return;
    }
    for code in &profile.courses {
        let Some(course) = registry.find_course_by_code(code.as_str()) else {
            println!("  - {code}");
            continue;
        };
        match profile.role {
            Role::Student => println!("  - {}: {}", course.code(), course.name()),
            Role::Instructor => println!(
                "  - {}: {} ({}/{} students)",
                course.code(),
                course.name(),
                course.current_enrollment(),
                course.max_students()
            ),
        }
    }
}

/// Detail view of a course and its registered students.
pub fn print_course(registry: &Registry, course: &Course) {
    heading("Course Information");
    println!("Course Code: {}", course.code());
    println!("Course Name: {}", course.name());
    println!("Enrollment: {}/{}", course.current_enrollment(), course.max_students());

    let students = registry.students_in_course(course.code().as_str()).unwrap_or_default();
    if students.is_empty() {
        println!("No students registered.");
        return;
    }
    println!("Registered Students:");
    for student in students {
        println!("  - {} (ID: {})", student.name(), student.id());
    }
}

pub fn print_summary(summary: &Summary) {
    heading("System Summary");
    println!("Total Students: {}", summary.students);
    println!("Total Instructors: {}", summary.instructors);
    println!("Total Courses: {}", summary.courses);
    println!("Total Enrollments: {}", summary.enrollments);
}

#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CourseRow {
    #[tabled(rename = "code")]
    pub code: String,
    #[tabled(rename = "name")]
    pub name: String,
    #[tabled(rename = "enrolled")]
    pub enrolled: String,
    #[tabled(rename = "students")]
    pub students: String,
}

pub fn course_rows(registry: &Registry) -> Vec<CourseRow> {
    registry
        .courses()
        .iter()
        .map(|course| CourseRow {
            code: course.code().to_string(),
            name: course.name().to_string(),
            enrolled: format!("{}/{}", course.current_enrollment(), course.max_students()),
            students: course
                .registered_students()
                .iter()
                .map(|id| id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn print_course_table(rows: Vec<CourseRow>) {
    if rows.is_empty() {
        println!("No courses in the system.");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
