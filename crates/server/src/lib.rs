//! This crate provides the command-line surface of the `pathfinder` application:
//! argument parsing, configuration layering, logging setup, and the command
//! handlers that render plans, LPI tables, mentor rankings, leadership leagues,
//! and course searches.
//!
//! The main entry point is the [`run`] function. [`execute`] runs a parsed
//! command against an explicit context and writer, which is what the tests use.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`, so command output on
//! stdout stays machine-readable.

use anyhow::Result;
use clap::Parser;
use pathfinder_dataset::DataPaths;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::CommandContext;

use commands::{
    handle_check_command, handle_courses_command, handle_leadership_command, handle_lpi_command,
    handle_mentors_command, handle_plans_command,
};
use pathfinder_intelligence::CourseQuery;

/// The main entry point for the `pathfinder` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config()?.unwrap_or_default();
    config::apply_data_config_to_env(&config.data);

    let cli = Cli::parse();
    let ctx = CommandContext {
        paths: DataPaths {
            employees: cli.employees,
            taxonomy: cli.taxonomy,
            courses: cli.courses,
        },
        extra_rules: config.rules,
        today: chrono::Local::now().date_naive(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &ctx, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Runs one command against `ctx`, writing its rendering to `out`.
pub fn execute(command: Commands, ctx: &CommandContext, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(target: "pathfinder::cli", ?command, "Executing command");

    match command {
        Commands::Plans { email, format } => {
            handle_plans_command(ctx, email.as_deref(), format, out)
        }
        Commands::Lpi { email, format } => handle_lpi_command(ctx, email.as_deref(), format, out),
        Commands::Mentors {
            email,
            limit,
            format,
        } => handle_mentors_command(ctx, &email, limit, format, out),
        Commands::Courses {
            query,
            skill,
            difficulty,
            language,
            min_hours,
            max_hours,
            limit,
            format,
        } => {
            let query = CourseQuery {
                query,
                skill,
                difficulty,
                language,
                min_hours,
                max_hours,
                limit,
            };
            handle_courses_command(ctx, &query, format, out)
        }
        Commands::Leadership { limit, format } => {
            handle_leadership_command(ctx, limit, format, out)
        }
        Commands::Check => handle_check_command(ctx, out),
    }
}
