//! Career-path intelligence over a pathfinder dataset snapshot.
//!
//! This crate provides:
//! - Tenure-weighted role skill profiles and cosine role adjacency
//! - Gap/fit scoring and the Leadership Potential Index (LPI)
//! - Per-employee plans, a leadership league, and mentor ranking
//! - Course catalog search
//!
//! Every entry point is a pure function of a [`pathfinder_dataset::Snapshot`]
//! (plus a reference date where tenure matters).

pub mod index;
pub mod recommend;
pub mod search;
mod types;

pub use index::{tenure_years, SkillIndex};
pub use recommend::{
    compute_lpi, cosine, default_rules, employee_summary, fit, gap_score,
    internal_mobility_options, lpi_table, mentor_score, nudged_roles, rank_mentors, vocabulary,
    EmployeePlan, EmployeeSummary, LeaderEntry, LpiBreakdown, MentorCandidate, MentorRanking,
    MentorSignals, Neighbor, NextRole, NudgeRule, Planner, RoleAdjacency, RuleTrigger,
    UpskillItem,
};
pub use search::{find_courses, relevance, CourseQuery, CourseResults, DEFAULT_COURSE_LIMIT};
pub use types::Lpi;
