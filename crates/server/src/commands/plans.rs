//! CLI handler for the `plans` command.

use super::{write_json, CommandContext};
use crate::cli::OutputFormat;
use anyhow::Result;
use pathfinder_intelligence::{employee_summary, EmployeePlan, Planner};
use std::io::Write;

/// Handle the `plans` command.
pub(crate) fn handle_plans_command(
    ctx: &CommandContext,
    email: Option<&str>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = ctx.load_planning()?;
    let planner = Planner::new(&snapshot, ctx.today).with_extra_rules(ctx.extra_rules.clone());
    let plans = planner.plans(email);

    if format == OutputFormat::Json {
        return write_json(out, &plans);
    }

    for (email, plan) in &plans {
        match plan {
            Some(plan) => {
                writeln!(out, "{}", employee_summary(plan))?;
                if plans.len() == 1 {
                    write_plan_details(out, plan)?;
                }
            }
            None => writeln!(out, "{email}: not found")?,
        }
    }
    Ok(())
}

fn write_plan_details(out: &mut dyn Write, plan: &EmployeePlan) -> Result<()> {
    if !plan.next_roles.is_empty() {
        writeln!(out, "\nNext roles:")?;
        for role in &plan.next_roles {
            write!(out, "  {} (fit {:.2})", role.role, role.fit)?;
            if role.missing_skills_example.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, " missing: {}", role.missing_skills_example.join(", "))?;
            }
        }
    }
    if !plan.upskilling_plan.is_empty() {
        writeln!(out, "\nUpskilling:")?;
        for item in &plan.upskilling_plan {
            writeln!(
                out,
                "  {} [{} / {}] - {}",
                item.skill, item.function_area, item.specialization, item.suggested_learning
            )?;
        }
    }
    if !plan.internal_mobility_options.is_empty() {
        writeln!(
            out,
            "\nMobility options: {}",
            plan.internal_mobility_options.join(", ")
        )?;
    }
    writeln!(out, "\nRecognition:")?;
    for nudge in &plan.recognition_nudges {
        writeln!(out, "  - {nudge}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context, render};
    use pathfinder_intelligence::{NudgeRule, RuleTrigger};
    use pathfinder_test_utils::DatasetFixture;

    #[test]
    fn json_plan_has_expected_shape() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_plans_command(&ctx, Some("ana@example.com"), OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let plan = &value["ana@example.com"];
        assert_eq!(plan["employee"]["role"], "Cloud Engineer");
        assert_eq!(plan["leadership_potential_index"], serde_json::json!(6.4));
        assert_eq!(plan["next_roles"][0]["role"], "Enterprise Architect");
        assert_eq!(plan["mentors"], serde_json::json!([]));
        assert_eq!(plan["recognition_nudges"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn all_plans_text_is_one_summary_per_employee() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| handle_plans_command(&ctx, None, OutputFormat::Text, out));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("ana@example.com | Cloud Engineer | Information Technology | LPI 6.40"));
    }

    #[test]
    fn single_plan_text_includes_details() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_plans_command(&ctx, Some("ana@example.com"), OutputFormat::Text, out)
        });
        assert!(text.contains("Next roles:"));
        assert!(text.contains("Enterprise Architect (fit 0.25)"));
        assert!(text.contains("Recognition:"));
    }

    #[test]
    fn unknown_email_is_null() {
        let fixture = DatasetFixture::new().unwrap();
        let ctx = context(&fixture);
        let text = render(|out| {
            handle_plans_command(&ctx, Some("ghost@example.com"), OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({"ghost@example.com": null}));
    }

    #[test]
    fn configured_rules_extend_candidates() {
        let fixture = DatasetFixture::new().unwrap();
        let mut ctx = context(&fixture);
        ctx.extra_rules = vec![NudgeRule {
            when: RuleTrigger::DepartmentEquals("Human Resources".into()),
            roles: vec!["People Analytics Lead".into()],
        }];
        let text = render(|out| {
            handle_plans_command(&ctx, Some("hana@example.com"), OutputFormat::Json, out)
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let roles: Vec<&str> = value["hana@example.com"]["next_roles"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["role"].as_str())
            .collect();
        assert!(roles.contains(&"People Analytics Lead"), "{roles:?}");
    }

    #[test]
    fn plans_skip_catalog_but_need_taxonomy() {
        let fixture = DatasetFixture::new().unwrap();
        std::fs::remove_file(&fixture.courses).unwrap();
        let ctx = context(&fixture);
        let text = render(|out| handle_plans_command(&ctx, None, OutputFormat::Text, out));
        assert_eq!(text.lines().count(), 6);

        std::fs::remove_file(&fixture.taxonomy).unwrap();
        let mut sink = Vec::<u8>::new();
        let err = handle_plans_command(&ctx, None, OutputFormat::Text, &mut sink).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("failed to load taxonomy"), "{chain}");
    }
}
