//! CLI handler for the `lpi` command.

use super::{write_json, CommandContext};
use crate::cli::OutputFormat;
use anyhow::Result;
use pathfinder_intelligence::lpi_table;
use std::io::Write;

/// Handle the `lpi` command.
pub(crate) fn handle_lpi_command(
    ctx: &CommandContext,
    email: Option<&str>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = ctx.load_people()?;
    let table = lpi_table(&snapshot, email);

    match format {
        OutputFormat::Json => write_json(out, &table)?,
        OutputFormat::Text => {
            for (email, lpi) in &table {
                match lpi {
                    Some(lpi) => writeln!(out, "{email}: {lpi}")?,
                    None => writeln!(out, "{email}: not found")?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, render};
    use pathfinder_test_utils::DatasetFixture;

    #[test]
    fn json_lists_every_employee_in_file_order() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| handle_lpi_command(&ctx, None, OutputFormat::Json, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map.keys().next().map(String::as_str), Some("ana@example.com"));
        assert_eq!(map["ana@example.com"], serde_json::json!(6.4));
    }

    #[test]
    fn unknown_email_is_null() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_lpi_command(&ctx, Some("ghost@example.com"), OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({"ghost@example.com": null}));

        let text = render(|out| {
            handle_lpi_command(&ctx, Some("ghost@example.com"), OutputFormat::Text, out)
        });
        assert_eq!(text, "ghost@example.com: not found\n");
    }

    #[test]
    fn text_uses_two_decimals() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_lpi_command(&ctx, Some("ana@example.com"), OutputFormat::Text, out)
        });
        assert_eq!(text, "ana@example.com: 6.40\n");
    }

    #[test]
    fn broken_catalog_does_not_block_lpi() {
        let fixture = DatasetFixture::new().unwrap();
        fixture.write_courses("title,provider\nOnly,Acme\n").unwrap();
        std::fs::remove_file(&fixture.taxonomy).unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_lpi_command(&ctx, Some("ana@example.com"), OutputFormat::Text, out)
        });
        assert_eq!(text, "ana@example.com: 6.40\n");
    }
}
