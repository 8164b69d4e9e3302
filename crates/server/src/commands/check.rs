//! CLI handler for the `check` command.

use super::CommandContext;
use anyhow::Result;
use std::io::Write;

/// Handle the `check` command.
pub(crate) fn handle_check_command(ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    let snapshot = ctx.load_snapshot()?;
    writeln!(out, "Employees: {}", snapshot.employees.len())?;
    writeln!(out, "Taxonomy rows: {}", snapshot.taxonomy.len())?;
    writeln!(out, "Courses: {}", snapshot.courses.len())?;
    Ok(())
}
