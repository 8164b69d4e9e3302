//! Career recommendations: role adjacency, fit, plans, and mentors.

pub mod mentor;
pub mod plan;
pub mod rules;
mod scorer;
pub mod similarity;

pub use mentor::{mentor_score, rank_mentors, MentorSignals};
pub use plan::{employee_summary, internal_mobility_options, lpi_table, Planner};
pub use rules::{default_rules, nudged_roles, NudgeRule, RuleTrigger};
pub use scorer::{compute_lpi, fit, gap_score, LpiBreakdown};
pub use similarity::{cosine, vocabulary, Neighbor, RoleAdjacency};

use crate::types::Lpi;
use serde::Serialize;

/// Identity block at the top of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    /// Employee email.
    pub email: String,
    /// Current job title.
    pub role: String,
    /// Department.
    pub department: String,
}

/// A suggested next role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextRole {
    /// Role name.
    pub role: String,
    /// Share of the role's skills the employee already has (0.0 - 1.0).
    pub fit: f64,
    /// Up to five of the role's skills the employee lacks.
    pub missing_skills_example: Vec<String>,
}

/// A skill to learn, taken from the taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpskillItem {
    /// Skill name.
    pub skill: String,
    /// Taxonomy function area.
    pub function_area: String,
    /// Taxonomy specialization.
    pub specialization: String,
    /// Placeholder course label.
    pub suggested_learning: String,
}

/// A ranked mentor candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorCandidate {
    /// Candidate email.
    pub email: String,
    /// Candidate job title.
    pub role: String,
    /// Candidate department.
    pub department: String,
    /// Candidate unit.
    pub unit: String,
    /// Candidate LPI.
    pub leadership_potential_index: Lpi,
    /// Suitability score, 3 decimals.
    pub score: f64,
}

/// Mentor ranking for one requester.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorRanking {
    /// Requested email, echoed even when unknown.
    pub email: String,
    /// Best candidates first.
    pub mentors: Vec<MentorCandidate>,
}

/// Development plan for one employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeePlan {
    /// Who the plan is for.
    pub employee: EmployeeSummary,
    /// Leadership potential index.
    pub leadership_potential_index: Lpi,
    /// Up to five next roles.
    pub next_roles: Vec<NextRole>,
    /// Up to eight skills to learn.
    pub upskilling_plan: Vec<UpskillItem>,
    /// Up to six prior role titles.
    pub internal_mobility_options: Vec<String>,
    /// Always empty here; mentors come from [`rank_mentors`].
    pub mentors: Vec<MentorCandidate>,
    /// Static recognition prompts.
    pub recognition_nudges: Vec<String>,
}

/// One row of the leadership league.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderEntry {
    /// Employee email.
    pub email: String,
    /// Current job title.
    pub role: String,
    /// Department.
    pub department: String,
    /// Leadership potential index.
    pub leadership_potential_index: Lpi,
    /// First three next-role names.
    pub next_roles: Vec<String>,
}
