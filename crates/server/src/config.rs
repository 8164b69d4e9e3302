//! Configuration file support for pathfinder.
//!
//! Loads settings from `~/.pathfinder/config.toml` (or `PATHFINDER_CONFIG`)
//! with the following precedence:
//! CLI arguments > Environment variables > Config file > Defaults
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.pathfinder/config.toml
//!
//! [data]
//! employees = "/srv/hr/Employee_Profiles.json"
//! taxonomy = "/srv/hr/Functions_Skills.csv"
//! courses = "/srv/hr/Courses_Catalog.csv"
//!
//! # Extra next-role rules, applied after the built-in ones
//! [[rules]]
//! roles = ["Data Platform Lead"]
//! [rules.when]
//! title_contains = "Data"
//! ```

use anyhow::{Context, Result};
use pathfinder_intelligence::NudgeRule;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "PATHFINDER_CONFIG";
/// Employee profile JSON path.
pub const ENV_EMPLOYEES: &str = "PATHFINDER_EMPLOYEES";
/// Skills taxonomy CSV path.
pub const ENV_TAXONOMY: &str = "PATHFINDER_TAXONOMY";
/// Course catalog CSV path.
pub const ENV_COURSES: &str = "PATHFINDER_COURSES";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Data file locations.
    #[serde(default)]
    pub data: DataConfig,
    /// Extra next-role rules.
    #[serde(default)]
    pub rules: Vec<NudgeRule>,
}

/// Locations of the input extracts.
#[derive(Debug, Default, Deserialize)]
pub struct DataConfig {
    /// Employee profile JSON.
    pub employees: Option<PathBuf>,
    /// Skills taxonomy CSV.
    pub taxonomy: Option<PathBuf>,
    /// Course catalog CSV.
    pub courses: Option<PathBuf>,
}

/// Returns the path to the config file.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|h| h.join(".pathfinder").join("config.toml"))
}

/// Parses a config file at `path`.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;

    tracing::debug!(
        target: "pathfinder::config",
        path = %path.display(),
        rules = config.rules.len(),
        "Loaded configuration file"
    );

    Ok(config)
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    load_config_from(&path).map(Some)
}

/// Applies data paths from the config file to environment variables.
///
/// Only sets variables that are not already set, preserving the precedence:
/// CLI > ENV > config file. Call before parsing CLI arguments.
pub fn apply_data_config_to_env(data: &DataConfig) {
    fn set_if_absent(key: &str, value: &Path) {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "pathfinder::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(ref path) = data.employees {
        set_if_absent(ENV_EMPLOYEES, path);
    }
    if let Some(ref path) = data.taxonomy {
        set_if_absent(ENV_TAXONOMY, path);
    }
    if let Some(ref path) = data.courses {
        set_if_absent(ENV_COURSES, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_intelligence::RuleTrigger;
    use pathfinder_test_utils::set_env_var;
    use serial_test::serial;

    #[test]
    fn parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.data.employees.is_none());
        assert!(config.rules.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [data]
            employees = "/data/emp.json"
            taxonomy = "/data/tax.csv"
            courses = "/data/courses.csv"

            [[rules]]
            roles = ["Data Platform Lead", "Analytics Manager"]
            [rules.when]
            title_contains = "Data"

            [[rules]]
            roles = ["Plant Director"]
            [rules.when]
            department_prefix = "Operations"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.data.employees, Some(PathBuf::from("/data/emp.json")));
        assert_eq!(config.data.courses, Some(PathBuf::from("/data/courses.csv")));
        assert_eq!(config.rules.len(), 2);
        assert_eq!(
            config.rules[1].when,
            RuleTrigger::DepartmentPrefix("Operations".into())
        );
    }

    #[test]
    #[serial]
    fn config_path_honours_env_override() {
        let _g = set_env_var(ENV_CONFIG, Some("/tmp/pathfinder-test.toml"));
        assert_eq!(config_path(), Some(PathBuf::from("/tmp/pathfinder-test.toml")));
    }

    #[test]
    #[serial]
    fn missing_config_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("absent.toml");
        let _g = set_env_var(ENV_CONFIG, missing.to_str());
        assert!(load_config().unwrap().is_none());
    }

    #[test]
    #[serial]
    fn malformed_config_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[data\nemployees = 1").unwrap();
        let _g = set_env_var(ENV_CONFIG, path.to_str());
        assert!(load_config().is_err());
    }

    #[test]
    #[serial]
    fn apply_config_respects_existing_env_vars() {
        let _emp = set_env_var(ENV_EMPLOYEES, Some("env-employees.json"));
        let _tax = set_env_var(ENV_TAXONOMY, None);

        let data = DataConfig {
            employees: Some(PathBuf::from("config-employees.json")),
            taxonomy: Some(PathBuf::from("config-taxonomy.csv")),
            courses: None,
        };
        apply_data_config_to_env(&data);

        assert_eq!(
            std::env::var(ENV_EMPLOYEES).unwrap(),
            "env-employees.json",
            "Config should not override existing env var"
        );
        assert_eq!(std::env::var(ENV_TAXONOMY).unwrap(), "config-taxonomy.csv");
    }
}
