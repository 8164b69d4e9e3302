//! Mentor suitability ranking.

use super::scorer::compute_lpi;
use super::similarity::{RoleAdjacency, MENTOR_ROLE_NEIGHBORS};
use super::{MentorCandidate, MentorRanking};
use crate::index::SkillIndex;
use crate::types::{round_to, Lpi};
use chrono::NaiveDate;
use pathfinder_dataset::Snapshot;
use std::cmp::Ordering;
use std::collections::HashSet;

const SAME_DEPARTMENT_WEIGHT: f64 = 0.35;
const SAME_UNIT_WEIGHT: f64 = 0.2;
const ADJACENT_ROLE_WEIGHT: f64 = 0.25;
const LPI_DELTA_WEIGHT: f64 = 0.2;
const SENIORITY_WEIGHT: f64 = 0.05;

/// Signals comparing one candidate mentor with the requester.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MentorSignals {
    /// Candidate works in the requester's department.
    pub same_department: bool,
    /// Candidate works in the requester's unit.
    pub same_unit: bool,
    /// Candidate's role is among the requester's nearest roles.
    pub adjacent_role: bool,
    /// Candidate LPI minus requester LPI.
    pub lpi_delta: f64,
    /// Number of prior positions the candidate held.
    pub prior_positions: usize,
}

/// Weighted suitability score. Only a positive LPI delta counts.
pub fn mentor_score(signals: &MentorSignals) -> f64 {
    let flag = |b: bool| if b { 1.0 } else { 0.0 };
    SAME_DEPARTMENT_WEIGHT * flag(signals.same_department)
        + SAME_UNIT_WEIGHT * flag(signals.same_unit)
        + ADJACENT_ROLE_WEIGHT * flag(signals.adjacent_role)
        + LPI_DELTA_WEIGHT * signals.lpi_delta.max(0.0) / Lpi::MAX
        + SENIORITY_WEIGHT * signals.prior_positions as f64
}

/// Ranks every other employee as a mentor for `email`.
///
/// An unknown email yields an empty ranking. `limit` is raised to at least 1.
/// Scores are reported to 3 decimals and ranking uses the reported value, so
/// candidates equal at that precision keep file order.
pub fn rank_mentors(
    snapshot: &Snapshot,
    today: NaiveDate,
    email: &str,
    limit: usize,
) -> MentorRanking {
    let Some(me) = snapshot.employee(email) else {
        tracing::debug!(target: "pathfinder::intelligence", email, "No employee for mentor lookup");
        return MentorRanking {
            email: email.to_string(),
            mentors: Vec::new(),
        };
    };

    let index = SkillIndex::build(&snapshot.employees, today);
    let adjacency = RoleAdjacency::build(&index, MENTOR_ROLE_NEIGHBORS);
    let similar_roles: HashSet<&str> = adjacency
        .neighbors(&me.job_title)
        .iter()
        .map(|n| n.role.as_str())
        .collect();
    let my_lpi = compute_lpi(me);

    let mut candidates: Vec<MentorCandidate> = snapshot
        .employees
        .iter()
        .filter(|e| e.email != email)
        .map(|e| {
            let lpi = compute_lpi(e);
            let signals = MentorSignals {
                same_department: e.department == me.department,
                same_unit: e.unit == me.unit,
                adjacent_role: similar_roles.contains(e.job_title.as_str()),
                lpi_delta: lpi.value() - my_lpi.value(),
                prior_positions: e.positions_history.len(),
            };
            MentorCandidate {
                email: e.email.clone(),
                role: e.job_title.clone(),
                department: e.department.clone(),
                unit: e.unit.clone(),
                leadership_potential_index: lpi,
                score: round_to(mentor_score(&signals), 3),
            }
        })
        .collect();

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(limit.max(1));

    MentorRanking {
        email: email.to_string(),
        mentors: candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_dataset::{Employee, Position};

    fn employee(email: &str, title: &str, department: &str, unit: &str, skills: &[&str]) -> Employee {
        Employee {
            email: email.into(),
            job_title: title.into(),
            department: department.into(),
            unit: unit.into(),
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

    #[test]
    fn test_same_department_strictly_increases_score() {
        let base = MentorSignals {
            same_unit: true,
            lpi_delta: 1.2,
            prior_positions: 2,
            ..MentorSignals::default()
        };
        let with_dept = MentorSignals {
            same_department: true,
            ..base
        };
        assert!(mentor_score(&with_dept) > mentor_score(&base));
        assert!((mentor_score(&with_dept) - mentor_score(&base) - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_negative_lpi_delta_ignored() {
        let signals = MentorSignals {
            lpi_delta: -4.0,
            ..MentorSignals::default()
        };
        assert_eq!(mentor_score(&signals), 0.0);
    }

    #[test]
    fn test_unknown_requester_returns_empty() {
        let snapshot = Snapshot {
            employees: vec![employee("a@example.com", "Dev", "IT", "Core", &[])],
            ..Snapshot::default()
        };
        let ranking = rank_mentors(&snapshot, today(), "ghost@example.com", 3);
        assert_eq!(ranking.email, "ghost@example.com");
        assert!(ranking.mentors.is_empty());
    }

    #[test]
    fn test_ranking_excludes_requester_and_orders_by_score() {
        let mut senior = employee("s@example.com", "Lead", "IT", "Other", &["Rust"]);
        senior.positions_history = vec![Position::default(); 2];
        let snapshot = Snapshot {
            employees: vec![
                employee("me@example.com", "Dev", "IT", "Core", &["Rust"]),
                employee("far@example.com", "Clerk", "Finance", "Ledger", &["Excel"]),
                employee("peer@example.com", "Dev", "IT", "Core", &["Rust"]),
                senior,
            ],
            ..Snapshot::default()
        };

        let ranking = rank_mentors(&snapshot, today(), "me@example.com", 10);
        let emails: Vec<&str> = ranking.mentors.iter().map(|m| m.email.as_str()).collect();
        assert!(!emails.contains(&"me@example.com"));
        // peer: 0.35 + 0.2 = 0.55 (own role is never adjacent)
        // senior: 0.35 + 0.25 + 0.2 * 0.6 / 10 + 0.1 = 0.712
        assert_eq!(emails, vec!["s@example.com", "peer@example.com", "far@example.com"]);
        assert_eq!(ranking.mentors[0].score, 0.712);
        assert_eq!(ranking.mentors[1].score, 0.55);
    }

    #[test]
    fn test_limit_is_at_least_one() {
        let snapshot = Snapshot {
            employees: vec![
                employee("a@example.com", "Dev", "IT", "Core", &[]),
                employee("b@example.com", "Dev", "IT", "Core", &[]),
                employee("c@example.com", "Dev", "IT", "Core", &[]),
            ],
            ..Snapshot::default()
        };
        assert_eq!(rank_mentors(&snapshot, today(), "a@example.com", 0).mentors.len(), 1);
        assert_eq!(rank_mentors(&snapshot, today(), "a@example.com", 5).mentors.len(), 2);
    }
}
