//! CLI handler for the `courses` command.

use super::{write_json, CommandContext};
use crate::cli::OutputFormat;
use anyhow::Result;
use pathfinder_intelligence::{find_courses, CourseQuery};
use std::io::Write;

/// Handle the `courses` command.
pub(crate) fn handle_courses_command(
    ctx: &CommandContext,
    query: &CourseQuery,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let courses = ctx.load_catalog()?;
    let results = find_courses(&courses, query);

    if format == OutputFormat::Json {
        return write_json(out, &results);
    }

    writeln!(
        out,
        "{} course(s) matched, showing {}",
        results.total,
        results.items.len()
    )?;
    for course in &results.items {
        let hours = course
            .duration_hours
            .map_or_else(|| "?".to_string(), |h| format!("{h}"));
        writeln!(
            out,
            "  {} [{}] {} / {} / {}h / {}",
            course.title,
            course.skill_name,
            course.provider,
            course.difficulty,
            hours,
            course.language
        )?;
        if let Some(url) = &course.url {
            writeln!(out, "    {url}")?;
        }
    }
    Ok(())
}
