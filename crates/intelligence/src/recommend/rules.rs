//! Business rules that add candidate roles regardless of skill similarity.

use pathfinder_dataset::Employee;
use serde::{Deserialize, Serialize};

/// Condition under which a rule fires. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleTrigger {
    /// Job title contains the text.
    TitleContains(String),
    /// Department equals the text.
    DepartmentEquals(String),
    /// Department starts with the text.
    DepartmentPrefix(String),
}

impl RuleTrigger {
    /// Returns true when `employee` satisfies the trigger.
    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::TitleContains(text) => employee.job_title.contains(text.as_str()),
            Self::DepartmentEquals(text) => employee.department == *text,
            Self::DepartmentPrefix(text) => employee.department.starts_with(text.as_str()),
        }
    }
}

/// Adds `roles` to an employee's next-role candidates when `when` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NudgeRule {
    /// Trigger condition.
    pub when: RuleTrigger,
    /// Roles appended in order.
    pub roles: Vec<String>,
}

impl NudgeRule {
    fn new(when: RuleTrigger, roles: &[&str]) -> Self {
        Self {
            when,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// The built-in rule set.
pub fn default_rules() -> Vec<NudgeRule> {
    vec![
        NudgeRule::new(
            RuleTrigger::TitleContains("Cloud".into()),
            &["Enterprise Architect", "IT Strategy Manager"],
        ),
        NudgeRule::new(
            RuleTrigger::DepartmentEquals("Finance".into()),
            &["Senior FP&A Manager", "Finance Business Partner"],
        ),
        NudgeRule::new(
            RuleTrigger::DepartmentPrefix("Human Resource".into()),
            &["Head of Talent Management", "OD & Leadership Lead"],
        ),
    ]
}

/// Roles contributed by every matching rule, in rule order.
pub fn nudged_roles<'a>(
    rules: &'a [NudgeRule],
    employee: &'a Employee,
) -> impl Iterator<Item = &'a str> + 'a {
    rules
        .iter()
        .filter(move |rule| rule.when.matches(employee))
        .flat_map(|rule| rule.roles.iter().map(String::as_str))
}
