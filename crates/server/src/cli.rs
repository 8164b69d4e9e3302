use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output rendering for command results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line interface for the `pathfinder` application.
#[derive(Debug, Parser)]
#[command(
    name = "pathfinder",
    about = "Career-path recommendations from HR profile, taxonomy, and course extracts"
)]
pub struct Cli {
    /// Employee profile JSON.
    #[arg(
        long,
        global = true,
        env = "PATHFINDER_EMPLOYEES",
        default_value = "data/Employee_Profiles.json",
        value_name = "PATH"
    )]
    pub employees: PathBuf,
    /// Skills taxonomy CSV.
    #[arg(
        long,
        global = true,
        env = "PATHFINDER_TAXONOMY",
        default_value = "data/Functions_Skills.csv",
        value_name = "PATH"
    )]
    pub taxonomy: PathBuf,
    /// Course catalog CSV.
    #[arg(
        long,
        global = true,
        env = "PATHFINDER_COURSES",
        default_value = "data/Courses_Catalog.csv",
        value_name = "PATH"
    )]
    pub courses: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available `pathfinder` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds development plans for every employee, or one with `--email`.
    Plans {
        /// Restrict output to this employee.
        #[arg(long)]
        email: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Shows the Leadership Potential Index.
    Lpi {
        /// Restrict output to this employee.
        #[arg(long)]
        email: Option<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ranks mentors for an employee.
    Mentors {
        /// Employee looking for a mentor.
        #[arg(long, required = true)]
        email: String,
        /// Maximum mentors returned (at least 1).
        #[arg(long, default_value_t = 3)]
        limit: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Searches the course catalog.
    Courses {
        /// Keyword matched against title, description, skill, and provider.
        #[arg(long)]
        query: Option<String>,
        /// Skill name substring.
        #[arg(long)]
        skill: Option<String>,
        /// Exact difficulty (case-insensitive).
        #[arg(long)]
        difficulty: Option<String>,
        /// Exact language (case-insensitive).
        #[arg(long)]
        language: Option<String>,
        /// Minimum duration in hours.
        #[arg(long, value_name = "HOURS")]
        min_hours: Option<f64>,
        /// Maximum duration in hours.
        #[arg(long, value_name = "HOURS")]
        max_hours: Option<f64>,
        /// Maximum courses returned.
        #[arg(long, default_value_t = pathfinder_intelligence::DEFAULT_COURSE_LIMIT)]
        limit: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lists employees with the highest Leadership Potential Index.
    Leadership {
        /// Number of employees shown.
        #[arg(long, default_value_t = 8)]
        limit: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Loads all three extracts and reports row counts.
    Check,
}
