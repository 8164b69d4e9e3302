//! Per-employee development plans.

use super::rules::{default_rules, nudged_roles, NudgeRule};
use super::scorer::{compute_lpi, fit};
use super::similarity::{RoleAdjacency, NEXT_ROLE_NEIGHBORS};
use super::{EmployeePlan, EmployeeSummary, LeaderEntry, NextRole, UpskillItem};
use crate::index::SkillIndex;
use crate::types::Lpi;
use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use pathfinder_dataset::{Employee, Snapshot};
use std::cmp::Ordering;

/// Minimum similarity for an adjacent role to be suggested.
pub const MIN_NEXT_ROLE_SIMILARITY: f64 = 0.2;
/// Maximum next-role suggestions per employee.
pub const MAX_NEXT_ROLES: usize = 5;
/// Maximum missing skills listed per suggested role.
pub const MAX_MISSING_SKILLS: usize = 5;
/// Maximum upskilling entries per employee.
pub const MAX_UPSKILLING: usize = 8;
/// Maximum internal mobility options per employee.
pub const MAX_MOBILITY_OPTIONS: usize = 6;
/// Next roles shown per leaderboard entry.
const LEADER_NEXT_ROLES: usize = 3;

/// Static recognition prompts attached to every plan.
pub const RECOGNITION_NUDGES: [&str; 3] = [
    "Give a shout-out to a teammate exemplifying Teamwork.",
    "Share one lesson learned in your team channel this week.",
    "Nominate a peer for monthly recognition program.",
];

/// Distinct prior role titles, first appearance first.
pub fn internal_mobility_options(employee: &Employee) -> Vec<String> {
    employee
        .positions_history
        .iter()
        .filter_map(|p| p.role_title.as_deref())
        .filter(|t| !t.is_empty())
        .collect::<IndexSet<_>>()
        .into_iter()
        .take(MAX_MOBILITY_OPTIONS)
        .map(str::to_string)
        .collect()
}

/// One-line description of a plan.
///
/// ```
/// use pathfinder_intelligence::{employee_summary, EmployeePlan, EmployeeSummary, Lpi};
///
/// let plan = EmployeePlan {
///     employee: EmployeeSummary {
///         email: "a@example.com".into(),
///         role: "Analyst".into(),
///         department: "Finance".into(),
///     },
///     leadership_potential_index: Lpi::new(3.5),
///     next_roles: vec![],
///     upskilling_plan: vec![],
///     internal_mobility_options: vec![],
///     mentors: vec![],
///     recognition_nudges: vec![],
/// };
/// assert_eq!(
///     employee_summary(&plan),
///     "a@example.com | Analyst | Finance | LPI 3.50 | Next roles: n/a"
/// );
/// ```
pub fn employee_summary(plan: &EmployeePlan) -> String {
    let next: Vec<&str> = plan
        .next_roles
        .iter()
        .take(LEADER_NEXT_ROLES)
        .map(|r| r.role.as_str())
        .collect();
    let next = if next.is_empty() {
        "n/a".to_string()
    } else {
        next.join(", ")
    };
    format!(
        "{} | {} | {} | LPI {} | Next roles: {}",
        plan.employee.email,
        plan.employee.role,
        plan.employee.department,
        plan.leadership_potential_index,
        next
    )
}

/// LPI for every employee, or `{email: None}` for a single unknown email.
pub fn lpi_table(snapshot: &Snapshot, email: Option<&str>) -> IndexMap<String, Option<Lpi>> {
    match email {
        Some(email) => {
            let lpi = snapshot.employee(email).map(compute_lpi);
            IndexMap::from([(email.to_string(), lpi)])
        }
        None => snapshot
            .employees
            .iter()
            .map(|e| (e.email.clone(), Some(compute_lpi(e))))
            .collect(),
    }
}

/// Builds plans over one snapshot.
#[derive(Debug)]
pub struct Planner<'a> {
    snapshot: &'a Snapshot,
    index: SkillIndex,
    adjacency: RoleAdjacency,
    rules: Vec<NudgeRule>,
}

impl<'a> Planner<'a> {
    /// Indexes `snapshot` with tenure measured at `today`, using the default rules.
    pub fn new(snapshot: &'a Snapshot, today: NaiveDate) -> Self {
        let index = SkillIndex::build(&snapshot.employees, today);
        let adjacency = RoleAdjacency::build(&index, NEXT_ROLE_NEIGHBORS);
        Self {
            snapshot,
            index,
            adjacency,
            rules: default_rules(),
        }
    }

    /// Appends extra rules after the current ones.
    pub fn with_extra_rules(mut self, rules: impl IntoIterator<Item = NudgeRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Replaces the rule set.
    pub fn with_rules(mut self, rules: Vec<NudgeRule>) -> Self {
        self.rules = rules;
        self
    }

    /// The role skill index backing this planner.
    pub fn index(&self) -> &SkillIndex {
        &self.index
    }

    /// Candidate role names: close neighbors first, then rule nudges, deduplicated.
    pub fn candidate_roles(&self, employee: &Employee) -> Vec<String> {
        let adjacent = self
            .adjacency
            .neighbors(&employee.job_title)
            .iter()
            .filter(|n| n.similarity > MIN_NEXT_ROLE_SIMILARITY)
            .map(|n| n.role.as_str());

        adjacent
            .chain(nudged_roles(&self.rules, employee))
            .collect::<IndexSet<_>>()
            .into_iter()
            .take(MAX_NEXT_ROLES)
            .map(str::to_string)
            .collect()
    }

    /// Scored next-role suggestions.
    pub fn next_roles(&self, employee: &Employee) -> Vec<NextRole> {
        self.candidate_roles(employee)
            .into_iter()
            .map(|role| {
                let target = self.index.role_skills(&role);
                let missing_skills_example = target
                    .iter()
                    .filter(|skill| !employee.has_skill(skill))
                    .take(MAX_MISSING_SKILLS)
                    .map(|s| s.to_string())
                    .collect();
                NextRole {
                    fit: fit(&employee.skills, &target),
                    role,
                    missing_skills_example,
                }
            })
            .collect()
    }

    /// The first taxonomy skills the employee lacks, in file order.
    pub fn upskilling_plan(&self, employee: &Employee) -> Vec<UpskillItem> {
        self.snapshot
            .taxonomy
            .iter()
            .filter(|row| !employee.has_skill(&row.skill_name))
            .take(MAX_UPSKILLING)
            .map(|row| UpskillItem {
                skill: row.skill_name.clone(),
                function_area: row.function_area.clone(),
                specialization: row.specialization.clone(),
                suggested_learning: format!("Course: {} Foundations (mock)", row.skill_name),
            })
            .collect()
    }

    /// Full plan for one employee.
    pub fn plan(&self, employee: &Employee) -> EmployeePlan {
        EmployeePlan {
            employee: EmployeeSummary {
                email: employee.email.clone(),
                role: employee.job_title.clone(),
                department: employee.department.clone(),
            },
            leadership_potential_index: compute_lpi(employee),
            next_roles: self.next_roles(employee),
            upskilling_plan: self.upskilling_plan(employee),
            internal_mobility_options: internal_mobility_options(employee),
            mentors: Vec::new(),
            recognition_nudges: RECOGNITION_NUDGES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Plans keyed by email in file order.
    ///
    /// With `email` set, the map holds exactly that key, with `None` when no
    /// employee matches.
    pub fn plans(&self, email: Option<&str>) -> IndexMap<String, Option<EmployeePlan>> {
        match email {
            Some(email) => {
                let plan = self.snapshot.employee(email).map(|e| self.plan(e));
                if plan.is_none() {
                    tracing::debug!(target: "pathfinder::intelligence", email, "No employee for plan lookup");
                }
                IndexMap::from([(email.to_string(), plan)])
            }
            None => self
                .snapshot
                .employees
                .iter()
                .map(|e| (e.email.clone(), Some(self.plan(e))))
                .collect(),
        }
    }

    /// Employees ranked by LPI, highest first; ties keep file order.
    pub fn leadership_league(&self, limit: usize) -> Vec<LeaderEntry> {
        let mut ranked: Vec<(&Employee, Lpi)> = self
            .snapshot
            .employees
            .iter()
            .map(|e| (e, compute_lpi(e)))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        ranked
            .into_iter()
            .take(limit)
            .map(|(e, lpi)| LeaderEntry {
                email: e.email.clone(),
                role: e.job_title.clone(),
                department: e.department.clone(),
                leadership_potential_index: lpi,
                next_roles: self
                    .candidate_roles(e)
                    .into_iter()
                    .take(LEADER_NEXT_ROLES)
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_dataset::{Position, TaxonomyRow};

    fn employee(email: &str, title: &str, department: &str, skills: &[&str]) -> Employee {
        Employee {
            email: email.into(),
            job_title: title.into(),
            department: department.into(),
            unit: "Unit".into(),
            in_role_since: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            competencies: vec![],
            positions_history: vec![],
            projects: vec![],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn taxonomy(skills: &[&str]) -> Vec<TaxonomyRow> {
        skills
            .iter()
            .map(|s| TaxonomyRow {
                function_area: "Area".into(),
                specialization: "Spec".into(),
                skill_name: s.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_cloud_engineer_gets_nudged_roles_without_similarity() {
        let snapshot = Snapshot {
            employees: vec![
                employee("c@example.com", "Cloud Engineer", "IT", &["Linux"]),
                employee("x@example.com", "Accountant", "Ledger", &["IFRS"]),
            ],
            ..Snapshot::default()
        };
        let planner = Planner::new(&snapshot, today());
        let roles = planner.candidate_roles(&snapshot.employees[0]);
        assert_eq!(roles, vec!["Enterprise Architect", "IT Strategy Manager"]);

        let next = planner.next_roles(&snapshot.employees[0]);
        // Unindexed roles have no skills, hence no gap.
        assert_eq!(next[0].fit, 1.0);
        assert!(next[0].missing_skills_example.is_empty());
    }

    #[test]
    fn test_candidates_are_deduplicated_and_capped() {
        let snapshot = Snapshot {
            employees: vec![
                employee("a@example.com", "Cloud Analyst", "Finance", &["SQL", "Excel"]),
                employee("b@example.com", "Enterprise Architect", "IT", &["SQL", "Excel"]),
                employee("c@example.com", "Finance Business Partner", "Finance", &["Excel"]),
                employee("d@example.com", "Data Analyst", "IT", &["SQL"]),
            ],
            ..Snapshot::default()
        };
        let planner = Planner::new(&snapshot, today());
        let roles = planner.candidate_roles(&snapshot.employees[0]);
        assert_eq!(
            roles,
            vec![
                "Enterprise Architect",
                "Finance Business Partner",
                "Data Analyst",
                "IT Strategy Manager",
                "Senior FP&A Manager",
            ]
        );
    }

    #[test]
    fn test_next_role_fit_and_missing_skills() {
        let snapshot = Snapshot {
            employees: vec![
                employee("a@example.com", "Junior", "Ops", &["Linux", "bash"]),
                employee("b@example.com", "Senior", "Ops", &["Linux", "Bash", "Go", "K8s"]),
            ],
            ..Snapshot::default()
        };
        let planner = Planner::new(&snapshot, today());
        let next = planner.next_roles(&snapshot.employees[0]);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].role, "Senior");
        // Fit is case-insensitive; missing examples match names exactly.
        assert_eq!(next[0].fit, 0.5);
        assert_eq!(next[0].missing_skills_example, vec!["Bash", "Go", "K8s"]);
    }

    #[test]
    fn test_upskilling_follows_taxonomy_order_and_caps() {
        let snapshot = Snapshot {
            employees: vec![employee("a@example.com", "Dev", "IT", &["S2", "S5"])],
            taxonomy: taxonomy(&["S1", "S2", "S3", "S4", "S5", "S6", "S7", "S8", "S9", "S10", "S11"]),
            ..Snapshot::default()
        };
        let planner = Planner::new(&snapshot, today());
        let plan = planner.upskilling_plan(&snapshot.employees[0]);
        let skills: Vec<&str> = plan.iter().map(|p| p.skill.as_str()).collect();
        assert_eq!(skills, vec!["S1", "S3", "S4", "S6", "S7", "S8", "S9", "S10"]);
        assert_eq!(plan[0].suggested_learning, "Course: S1 Foundations (mock)");
    }

    #[test]
    fn test_mobility_options_distinct_in_order() {
        let mut e = employee("a@example.com", "Dev", "IT", &[]);
        e.positions_history = ["A", "B", "A", "", "C", "D", "E", "F", "G"]
            .iter()
            .map(|t| Position {
                role_title: Some(t.to_string()),
            })
            .chain(std::iter::once(Position { role_title: None }))
            .collect();
        assert_eq!(internal_mobility_options(&e), vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_plans_for_unknown_email_is_null_entry() {
        let snapshot = Snapshot {
            employees: vec![employee("a@example.com", "Dev", "IT", &[])],
            ..Snapshot::default()
        };
        let planner = Planner::new(&snapshot, today());
        let plans = planner.plans(Some("ghost@example.com"));
        assert_eq!(plans.len(), 1);
        assert!(plans["ghost@example.com"].is_none());
        assert!(planner.plans(None)["a@example.com"].is_some());
    }

    #[test]
    fn test_custom_rules_replace_defaults() {
        let snapshot = Snapshot {
            employees: vec![employee("a@example.com", "Cloud Engineer", "IT", &[])],
            ..Snapshot::default()
        };
        let planner = Planner::new(&snapshot, today()).with_rules(vec![]);
        assert!(planner.candidate_roles(&snapshot.employees[0]).is_empty());
    }

    #[test]
    fn test_lpi_table_unknown_email() {
        let snapshot = Snapshot {
            employees: vec![employee("a@example.com", "Dev", "IT", &[])],
            ..Snapshot::default()
        };
        let table = lpi_table(&snapshot, Some("ghost@example.com"));
        assert_eq!(table.get("ghost@example.com"), Some(&None));
        let all = lpi_table(&snapshot, None);
        assert_eq!(all["a@example.com"].map(|l| l.value()), Some(3.5));
    }
}
