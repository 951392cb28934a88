//! `registrar demo` — scripted walkthrough on a small built-in campus.

use anyhow::{Context, Result};
use colored::Colorize;

use registrar_core::{Course, Instructor, Person, Registry, Student};

use super::render::{heading, mark, print_course, print_profile, print_summary};

const STUDENTS: [(&str, &str, &str); 3] = [
    ("Alice Johnson", "alice.johnson@email.com", "S001"),
    ("Bob Smith", "bob.smith@email.com", "S002"),
    ("Carol Davis", "carol.davis@email.com", "S003"),
];

const INSTRUCTORS: [(&str, &str, &str); 2] = [
    ("Dr. John Wilson", "john.wilson@university.edu", "I001"),
    ("Prof. Sarah Brown", "sarah.brown@university.edu", "I002"),
];

const COURSES: [(&str, &str, i64); 3] = [
    ("CS101", "Introduction to Computer Science", 30),
    ("MATH200", "Calculus II", 25),
    ("ENG150", "English Composition", 20),
];

const ENROLLMENTS: [(&str, &str); 6] = [
    ("S001", "CS101"),
    ("S001", "MATH200"),
    ("S002", "CS101"),
    ("S002", "ENG150"),
    ("S003", "MATH200"),
    ("S003", "ENG150"),
];

const ASSIGNMENTS: [(&str, &str); 3] = [("I001", "CS101"), ("I001", "MATH200"), ("I002", "ENG150")];

const DROPS: [(&str, &str); 2] = [("S001", "MATH200"), ("S002", "ENG150")];

pub fn run() -> Result<()> {
    println!("{}", "STUDENT COURSE REGISTRATION".bold());
    let mut registry = Registry::new();

    section(1, "Creating students");
    for (name, email, id) in STUDENTS {
        let student = Student::new(name, email, id)
            .with_context(|| format!("failed to create student '{id}'"))?;
        let added = registry.add_student(student);
        println!("{} student {name} ({id})", mark(added));
    }

    section(2, "Creating instructors");
    for (name, email, id) in INSTRUCTORS {
        let instructor = Instructor::new(name, email, id)
            .with_context(|| format!("failed to create instructor '{id}'"))?;
        let added = registry.add_instructor(instructor);
        println!("{} instructor {name} ({id})", mark(added));
    }

    section(3, "Creating courses");
    for (code, name, max) in COURSES {
        let course = Course::new(code, name, max)
            .with_context(|| format!("failed to create course '{code}'"))?;
        let added = registry.add_course(course);
        println!("{} course {code} ({max} seats)", mark(added));
    }

    section(4, "Student enrollment");
    for (student, course) in ENROLLMENTS {
        let ok = registry.register_student_to_course(student, course);
        println!("{} {student} -> {course}", mark(ok));
    }

    section(5, "Instructor assignments");
    for (instructor, course) in ASSIGNMENTS {
        let ok = registry.assign_instructor_to_course(instructor, course);
        println!("{} {instructor} -> {course}", mark(ok));
    }

    section(6, "People");
    let people: Vec<&dyn Person> = ["S001", "S002"]
        .into_iter()
        .filter_map(|id| registry.find_student_by_id(id).map(|s| s as &dyn Person))
        .chain(
            ["I001", "I002"]
                .into_iter()
                .filter_map(|id| registry.find_instructor_by_id(id).map(|i| i as &dyn Person)),
        )
        .collect();
    for person in people {
        print_profile(&registry, person);
    }

    section(7, "Courses");
    for course in registry.courses() {
        print_course(&registry, course);
    }

    section(8, "Dropping courses");
    for (student, course) in DROPS {
        let ok = registry.drop_student_from_course(student, course);
        println!("{} {student} drops {course}", mark(ok));
    }

    section(9, "Updated students");
    for id in ["S001", "S002"] {
        if let Some(student) = registry.find_student_by_id(id) {
            print_profile(&registry, student);
        }
    }

    section(10, "Updated courses");
    for code in ["MATH200", "ENG150"] {
        if let Some(course) = registry.find_course_by_code(code) {
            print_course(&registry, course);
        }
    }

    section(11, "Summary");
    print_summary(&registry.summary());

    section(12, "Input validation");
    match Student::new("Invalid User", "invalid-email", "S999") {
        Ok(_) => println!("{} student with email 'invalid-email' was accepted", mark(false)),
        Err(err) => println!("{} rejected student: {err}", mark(true)),
    }
    match Course::new("INVALID", "Invalid Course", 10) {
        Ok(_) => println!("{} course 'INVALID' was accepted", mark(false)),
        Err(err) => println!("{} rejected course: {err}", mark(true)),
    }

    section(13, "Final state");
    for student in registry.students() {
        print_profile(&registry, student);
    }
    for instructor in registry.instructors() {
        print_profile(&registry, instructor);
    }
    for course in registry.courses() {
        print_course(&registry, course);
    }

    heading("Walkthrough complete");
    Ok(())
}

fn section(n: u32, title: &str) {
    println!("\n{}", format!("{n}. {}", title.to_uppercase()).cyan().bold());
}
