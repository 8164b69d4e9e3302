//! CLI handler for the `mentors` command.

use super::{write_json, CommandContext};
use crate::cli::OutputFormat;
use anyhow::Result;
use pathfinder_intelligence::rank_mentors;
use std::io::Write;

/// Handle the `mentors` command.
pub(crate) fn handle_mentors_command(
    ctx: &CommandContext,
    email: &str,
    limit: usize,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = ctx.load_people()?;
    let ranking = rank_mentors(&snapshot, ctx.today, email, limit);

    if format == OutputFormat::Json {
        return write_json(out, &ranking);
    }

    if ranking.mentors.is_empty() {
        writeln!(out, "No mentors found for {email}.")?;
        return Ok(());
    }
    writeln!(out, "Mentors for {email}:")?;
    for m in &ranking.mentors {
        writeln!(
            out,
            "  {:.3}  {} | {} | {} / {} | LPI {}",
            m.score, m.email, m.role, m.department, m.unit, m.leadership_potential_index
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, render};
    use pathfinder_test_utils::DatasetFixture;

    #[test]
    fn json_ranks_mentors_for_requester() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_mentors_command(&ctx, "raj@example.com", 3, OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["email"], "raj@example.com");
        let emails: Vec<&str> = value["mentors"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|m| m["email"].as_str())
            .collect();
        assert_eq!(emails, vec!["mei@example.com", "ana@example.com", "lia@example.com"]);
        assert_eq!(value["mentors"][0]["score"], serde_json::json!(0.814));
    }

    #[test]
    fn zero_limit_still_returns_one() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_mentors_command(&ctx, "raj@example.com", 0, OutputFormat::Text, out)
        });
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("mei@example.com"));
    }

    #[test]
    fn unknown_requester_has_no_mentors() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_mentors_command(&ctx, "ghost@example.com", 3, OutputFormat::Text, out)
        });
        assert_eq!(text, "No mentors found for ghost@example.com.\n");
    }

    #[test]
    fn ranking_needs_only_employees() {
        let fixture = DatasetFixture::new().unwrap();
        std::fs::remove_file(&fixture.courses).unwrap();
        std::fs::remove_file(&fixture.taxonomy).unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_mentors_command(&ctx, "raj@example.com", 1, OutputFormat::Text, out)
        });
        assert!(text.contains("mei@example.com"));
    }
}
