//! Shared test utilities for pathfinder crates.
//!
//! This crate provides an env-var guard and a small on-disk dataset used by the
//! integration tests of every crate in the workspace.

use std::path::{Path, PathBuf};

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = pathfinder_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Six employees across IT, Finance, and HR.
///
/// Tenure dates are chosen relative to a reference date of 2025-01-01.
pub const SAMPLE_EMPLOYEES_JSON: &str = r#"[
  {
    "personal_info": {"email": "ana@example.com", "name": "Ana"},
    "employment_info": {"job_title": "Cloud Engineer", "department": "Information Technology",
                        "unit": "Infrastructure", "in_role_since": "2022-01-01"},
    "skills": [{"skill_name": "Linux"}, {"skill_name": "Terraform"}, {"skill_name": "AWS"}],
    "competencies": [{"name": "Delivery", "level": "Advanced"}, {"name": "Ownership", "level": "Expert"}],
    "positions_history": [{"role_title": "Sysadmin"}, {"role_title": "Support Engineer"}],
    "projects": [{"name": "Migration", "outcomes": ["lower cost", "faster deploys"]}]
  },
  {
    "personal_info": {"email": "raj@example.com", "name": "Raj"},
    "employment_info": {"job_title": "Cloud Engineer", "department": "Information Technology",
                        "unit": "Infrastructure", "in_role_since": "2024-07-01"},
    "skills": [{"skill_name": "Linux"}, {"skill_name": "AWS"}, {"skill_name": "Kubernetes"}],
    "competencies": [{"name": "Delivery", "level": "Intermediate"}],
    "positions_history": [{"role_title": "Sysadmin"}],
    "projects": [{"name": "Cluster", "outcomes": ["autoscaling"]}]
  },
  {
    "personal_info": {"email": "mei@example.com", "name": "Mei"},
    "employment_info": {"job_title": "Enterprise Architect", "department": "Information Technology",
                        "unit": "Architecture", "in_role_since": "2019-05-01"},
    "skills": [{"skill_name": "AWS"}, {"skill_name": "Kubernetes"}, {"skill_name": "Solution Design"},
               {"skill_name": "Governance"}],
    "competencies": [{"name": "Vision", "level": "Expert"}, {"name": "Influence", "level": "Expert"}],
    "positions_history": [{"role_title": "Cloud Engineer"}, {"role_title": "Sysadmin"},
                          {"role_title": "Developer"}],
    "projects": [{"name": "Blueprint", "outcomes": ["standards", "roadmap"]},
                 {"name": "Audit", "outcomes": ["compliance"]}]
  },
  {
    "personal_info": {"email": "tom@example.com", "name": "Tom"},
    "employment_info": {"job_title": "Financial Analyst", "department": "Finance",
                        "unit": "FP&A", "in_role_since": "2023-01-01"},
    "skills": [{"skill_name": "Excel"}, {"skill_name": "Financial Modelling"}]
  },
  {
    "personal_info": {"email": "lia@example.com", "name": "Lia"},
    "employment_info": {"job_title": "Senior FP&A Manager", "department": "Finance",
                        "unit": "FP&A", "in_role_since": "2020-01-01"},
    "skills": [{"skill_name": "Excel"}, {"skill_name": "Financial Modelling"},
               {"skill_name": "Budgeting"}, {"skill_name": "Stakeholder Management"}],
    "competencies": [{"name": "Planning", "level": "Advanced"}],
    "positions_history": [{"role_title": "Financial Analyst"}, {"role_title": "Finance Business Partner"}],
    "projects": [{"name": "Forecast", "outcomes": ["accuracy", "speed"]}]
  },
  {
    "personal_info": {"email": "hana@example.com", "name": "Hana"},
    "employment_info": {"job_title": "HR Generalist", "department": "Human Resources",
                        "unit": "People Operations"},
    "skills": [{"skill_name": "Recruiting"}, {"skill_name": "Employee Relations"}],
    "competencies": [{"name": "Empathy", "level": "Beginner"}],
    "positions_history": [{"role_title": "HR Assistant"}]
  }
]"#;

/// Ten taxonomy rows with human-style headers.
pub const SAMPLE_TAXONOMY_CSV: &str = "\
Function Area,Specialization,Skill
Technology,Cloud,Linux
Technology,Cloud,Kubernetes
Technology,Architecture,Solution Design
Finance,Planning,Budgeting
Finance,Planning,Excel
Human Resources,Talent,Recruiting
Human Resources,Talent,Coaching
Technology,Security,Threat Modelling
Finance,Reporting,IFRS
Leadership,People,Stakeholder Management
";

/// Five catalog courses, one with an unknown duration.
pub const SAMPLE_COURSES_CSV: &str = "\
Course Title,Skill Name,Provider,Level,Duration (hours),Language,URL,Description
Python for Everyone,Python Basics,Coursera,Beginner,12,English,https://example.test/py,Start programming in Python
Python at Scale,Python Advanced,Udemy,Advanced,30,English,,Packaging and performance for python services
Kubernetes Fundamentals,Kubernetes,Linux Foundation,Intermediate,5,English,https://example.test/k8s,Container orchestration basics
Modelos Financieros,Financial Modelling,Ledger Academy,Intermediate,,Spanish,,Modelado financiero
Leading Teams,Stakeholder Management,LinkedIn Learning,Beginner,3,English,,Influence without authority
";

/// A dataset written to a temporary directory.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct DatasetFixture {
    pub tempdir: tempfile::TempDir,
    /// Employee profile JSON.
    pub employees: PathBuf,
    /// Skills taxonomy CSV.
    pub taxonomy: PathBuf,
    /// Course catalog CSV.
    pub courses: PathBuf,
}

impl DatasetFixture {
    /// Create a fixture populated with the sample dataset.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let employees = tempdir.path().join("Employee_Profiles.json");
        let taxonomy = tempdir.path().join("Functions_Skills.csv");
        let courses = tempdir.path().join("Courses_Catalog.csv");

        std::fs::write(&employees, SAMPLE_EMPLOYEES_JSON)?;
        std::fs::write(&taxonomy, SAMPLE_TAXONOMY_CSV)?;
        std::fs::write(&courses, SAMPLE_COURSES_CSV)?;

        Ok(Self {
            tempdir,
            employees,
            taxonomy,
            courses,
        })
    }

    /// Root of the fixture directory.
    pub fn root(&self) -> &Path {
        self.tempdir.path()
    }

    /// Replace the employee file.
    pub fn write_employees(&self, json: &str) -> std::io::Result<()> {
        std::fs::write(&self.employees, json)
    }

    /// Replace the taxonomy file.
    pub fn write_taxonomy(&self, csv: &str) -> std::io::Result<()> {
        std::fs::write(&self.taxonomy, csv)
    }

    /// Replace the course file.
    pub fn write_courses(&self, csv: &str) -> std::io::Result<()> {
        std::fs::write(&self.courses, csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_var_sets_and_restores() {
        const KEY: &str = "PATHFINDER_TEST_UTILS_TEST_VAR";
        std::env::remove_var(KEY);

        {
            let _guard = set_env_var(KEY, Some("test_value"));
            assert_eq!(std::env::var(KEY).ok(), Some("test_value".to_string()));
        }
        // Removed again since it didn't exist before
        assert!(std::env::var(KEY).is_err());
    }

    #[test]
    fn test_set_env_var_restores_previous_value() {
        const KEY: &str = "PATHFINDER_TEST_RESTORE_VAR";
        std::env::set_var(KEY, "original");

        {
            let _guard = set_env_var(KEY, Some("changed"));
            assert_eq!(std::env::var(KEY).ok(), Some("changed".to_string()));
        }
        assert_eq!(std::env::var(KEY).ok(), Some("original".to_string()));

        std::env::remove_var(KEY);
    }

    #[test]
    fn test_sample_employees_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(SAMPLE_EMPLOYEES_JSON).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn test_fixture_writes_all_files() {
        let fixture = DatasetFixture::new().expect("fixture creation");
        assert!(fixture.employees.is_file());
        assert!(fixture.taxonomy.is_file());
        assert!(fixture.courses.is_file());
        assert!(fixture.employees.starts_with(fixture.root()));

        fixture.write_courses("Title\n").unwrap();
        let content = std::fs::read_to_string(&fixture.courses).unwrap();
        assert_eq!(content, "Title\n");
    }
}
