//! `registrar report <roster> [--json]` — replay a roster and print the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use registrar_core::{load_roster_at, ApplyReport, Outcome, Registry, Summary};

use super::render::{course_rows, mark, print_course_table, print_summary, CourseRow};

/// Arguments for `registrar report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to a YAML roster file.
    pub roster: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ReportJson<'a> {
    summary: Summary,
    courses: Vec<CourseRow>,
    outcomes: &'a ApplyReport,
}

impl ReportArgs {
    pub fn run(self) -> Result<()> {
        let (registry, applied) = build(&self.roster)?;

        if self.json {
            let payload = ReportJson {
                summary: registry.summary(),
                courses: course_rows(&registry),
                outcomes: &applied,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize report JSON")?
            );
            return Ok(());
        }

        println!(
            "Roster {} | {} of {} steps applied",
            self.roster.display(),
            applied.applied_count(),
            applied.outcomes.len()
        );
        for outcome in &applied.outcomes {
            println!("{} {}", mark(outcome.applied), describe(outcome));
        }
        println!();
        print_course_table(course_rows(&registry));
        print_summary(&registry.summary());
        Ok(())
    }
}

/// Load and replay a roster, with CLI-level error context.
pub fn build(path: &Path) -> Result<(Registry, ApplyReport)> {
    let roster = load_roster_at(path)
        .with_context(|| format!("failed to load roster '{}'", path.display()))?;
    let built = roster
        .build()
        .with_context(|| format!("roster '{}' contains an invalid entry", path.display()))?;
    tracing::debug!(path = %path.display(), "roster built");
    Ok(built)
}

fn describe(outcome: &Outcome) -> String {
    match &outcome.course {
        Some(course) => format!("{} {} -> {}", outcome.action, outcome.subject, course),
        None => format!("{} {}", outcome.action, outcome.subject),
    }
}
