//! CLI handler for the `leadership` command.

use super::{write_json, CommandContext};
use crate::cli::OutputFormat;
use anyhow::Result;
use pathfinder_intelligence::Planner;
use std::io::Write;

/// Handle the `leadership` command.
pub(crate) fn handle_leadership_command(
    ctx: &CommandContext,
    limit: usize,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = ctx.load_people()?;
    let planner = Planner::new(&snapshot, ctx.today).with_extra_rules(ctx.extra_rules.clone());
    let league = planner.leadership_league(limit);

    if format == OutputFormat::Json {
        return write_json(out, &league);
    }

    for (rank, entry) in league.iter().enumerate() {
        let next = if entry.next_roles.is_empty() {
            "n/a".to_string()
        } else {
            entry.next_roles.join(", ")
        };
        writeln!(
            out,
            "{:>2}. {} | {} | {} | LPI {} | Next roles: {}",
            rank + 1,
            entry.email,
            entry.role,
            entry.department,
            entry.leadership_potential_index,
            next
        )?;
    }
    Ok(())
}
