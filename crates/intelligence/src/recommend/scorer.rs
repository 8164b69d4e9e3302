//! Gap, fit, and leadership-potential scoring.

use crate::types::{round_to, Lpi};
use pathfinder_dataset::Employee;
use std::collections::HashSet;

/// Competency component when an employee has no competency records.
const NEUTRAL_COMPETENCY: f64 = 0.5;
/// Weight used for a competency whose level is absent or unrecognised.
const UNKNOWN_LEVEL_WEIGHT: f64 = 0.5;

const IMPACT_BASE: f64 = 0.3;
const IMPACT_PER_OUTCOME: f64 = 0.1;
const PROGRESSION_BASE: f64 = 0.2;
const PROGRESSION_PER_POSITION: f64 = 0.1;

const COMPETENCY_WEIGHT: f64 = 0.4;
const IMPACT_WEIGHT: f64 = 0.3;
const PROGRESSION_WEIGHT: f64 = 0.3;

/// Fraction of `target` skills missing from `current`, compared case-insensitively.
///
/// An empty target has no gap.
///
/// ```
/// use pathfinder_intelligence::gap_score;
///
/// assert_eq!(gap_score(&["A"], &["a", "B"]), 0.5);
/// assert_eq!(gap_score::<&str, &str>(&[], &[]), 0.0);
/// ```
pub fn gap_score<C: AsRef<str>, T: AsRef<str>>(current: &[C], target: &[T]) -> f64 {
    if target.is_empty() {
        return 0.0;
    }
    let have: HashSet<String> = current.iter().map(|s| s.as_ref().to_lowercase()).collect();
    let missing = target
        .iter()
        .filter(|s| !have.contains(&s.as_ref().to_lowercase()))
        .count();
    missing as f64 / target.len() as f64
}

/// `1 - gap_score`, rounded to 2 decimals.
pub fn fit<C: AsRef<str>, T: AsRef<str>>(current: &[C], target: &[T]) -> f64 {
    round_to(1.0 - gap_score(current, target), 2)
}

/// Components that make up the leadership potential index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LpiBreakdown {
    /// Mean competency level weight.
    pub competency: f64,
    /// Project impact, capped at 1.0.
    pub impact: f64,
    /// Role progression, capped at 1.0.
    pub progression: f64,
}

impl LpiBreakdown {
    /// Derives the components from an employee record.
    pub fn of(employee: &Employee) -> Self {
        let competency = if employee.competencies.is_empty() {
            NEUTRAL_COMPETENCY
        } else {
            let total: f64 = employee
                .competencies
                .iter()
                .map(|c| c.level().map_or(UNKNOWN_LEVEL_WEIGHT, |l| l.weight()))
                .sum();
            total / employee.competencies.len() as f64
        };
        let impact =
            (IMPACT_BASE + IMPACT_PER_OUTCOME * employee.outcome_count() as f64).min(1.0);
        let progression = (PROGRESSION_BASE
            + PROGRESSION_PER_POSITION * employee.positions_history.len() as f64)
            .min(1.0);
        Self {
            competency,
            impact,
            progression,
        }
    }

    /// Weighted total on the 0-10 scale, before clamping.
    pub fn raw(&self) -> f64 {
        10.0 * (COMPETENCY_WEIGHT * self.competency
            + IMPACT_WEIGHT * self.impact
            + PROGRESSION_WEIGHT * self.progression)
    }
}

/// Leadership potential index of an employee.
pub fn compute_lpi(employee: &Employee) -> Lpi {
    Lpi::new(LpiBreakdown::of(employee).raw())
}
