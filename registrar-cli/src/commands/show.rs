//! `registrar show <roster> student|instructor|course <key>`

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};

use super::render::{print_course, print_profile};
use super::report::build;

/// Which collection to look the key up in.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EntityKind {
    Student,
    Instructor,
    Course,
}

/// Arguments for `registrar show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Path to a YAML roster file.
    pub roster: PathBuf,

    /// student | instructor | course
    #[arg(value_enum)]
    pub kind: EntityKind,

    /// Student id, instructor id or course code.
    pub key: String,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let (registry, _) = build(&self.roster)?;
        match self.kind {
            EntityKind::Student => {
                let student = registry
                    .find_student_by_id(&self.key)
                    .ok_or_else(|| anyhow!("no student with id '{}' in roster", self.key))?;
                print_profile(&registry, student);
            }
            EntityKind::Instructor => {
                let instructor = registry
                    .find_instructor_by_id(&self.key)
                    .ok_or_else(|| anyhow!("no instructor with id '{}' in roster", self.key))?;
                print_profile(&registry, instructor);
            }
            EntityKind::Course => {
                let course = registry
                    .find_course_by_code(&self.key.to_uppercase())
                    .ok_or_else(|| anyhow!("no course with code '{}' in roster", self.key))?;
                print_course(&registry, course);
            }
        }
        Ok(())
    }
}
