//! CLI command handlers for the pathfinder application.
//!
//! Every handler loads only the extracts it needs, computes its result, and
//! renders it to the supplied writer so tests can capture output.

mod check;
mod courses;
mod leadership;
mod lpi;
mod mentors;
mod plans;

pub(crate) use check::handle_check_command;
pub(crate) use courses::handle_courses_command;
pub(crate) use leadership::handle_leadership_command;
pub(crate) use lpi::handle_lpi_command;
pub(crate) use mentors::handle_mentors_command;
pub(crate) use plans::handle_plans_command;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use pathfinder_dataset::{
    load_courses, load_employees, load_taxonomy, Course, DataPaths, Employee, Snapshot,
};
use pathfinder_intelligence::NudgeRule;
use serde::Serialize;
use std::io::Write;

/// Inputs shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Extract locations after CLI/env/config resolution.
    pub paths: DataPaths,
    /// Next-role rules appended after the built-in ones.
    pub extra_rules: Vec<NudgeRule>,
    /// Reference date for tenure.
    pub today: NaiveDate,
}

impl CommandContext {
    /// All three extracts; used by `check`.
    pub(crate) fn load_snapshot(&self) -> Result<Snapshot> {
        Snapshot::load(&self.paths).with_context(|| {
            format!(
                "failed to load dataset (employees: {}, taxonomy: {}, courses: {})",
                self.paths.employees.display(),
                self.paths.taxonomy.display(),
                self.paths.courses.display()
            )
        })
    }

    /// Employees only; enough for LPI, mentors, and the leadership league.
    pub(crate) fn load_people(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            employees: self.employees()?,
            ..Snapshot::default()
        })
    }

    /// Employees and taxonomy; what plans need.
    pub(crate) fn load_planning(&self) -> Result<Snapshot> {
        let employees = self.employees()?;
        let taxonomy = load_taxonomy(&self.paths.taxonomy).with_context(|| {
            format!("failed to load taxonomy {}", self.paths.taxonomy.display())
        })?;
        Ok(Snapshot {
            employees,
            taxonomy,
            ..Snapshot::default()
        })
    }

    /// The course catalog alone.
    pub(crate) fn load_catalog(&self) -> Result<Vec<Course>> {
        load_courses(&self.paths.courses).with_context(|| {
            format!("failed to load course catalog {}", self.paths.courses.display())
        })
    }

    fn employees(&self) -> Result<Vec<Employee>> {
        load_employees(&self.paths.employees).with_context(|| {
            format!("failed to load employees {}", self.paths.employees.display())
        })
    }
}

pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
