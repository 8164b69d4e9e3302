//! Tenure-weighted skill profiles per role.

use chrono::NaiveDate;
use indexmap::IndexMap;
use pathfinder_dataset::Employee;

/// Tenure assumed when the role start date is absent or unparseable.
pub const DEFAULT_TENURE_YEARS: f64 = 1.0;
/// Floor applied to measured tenure.
pub const MIN_TENURE_YEARS: f64 = 0.5;
/// Cap on a single employee's contribution to one skill.
pub const MAX_CONTRIBUTION: f64 = 2.0;

/// Years in the current role as of `today`.
///
/// ```
/// use chrono::NaiveDate;
/// use pathfinder_intelligence::tenure_years;
///
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(tenure_years(None, today), 1.0);
/// assert_eq!(tenure_years(Some("2024-12-01"), today), 0.5);
/// assert_eq!(tenure_years(Some("not a date"), today), 1.0);
/// ```
pub fn tenure_years(in_role_since: Option<&str>, today: NaiveDate) -> f64 {
    let Some(raw) = in_role_since.filter(|s| !s.is_empty()) else {
        return DEFAULT_TENURE_YEARS;
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(start) => {
            let days = (today - start).num_days() as f64;
            (days / 365.0).max(MIN_TENURE_YEARS)
        }
        Err(_) => {
            tracing::debug!(
                target: "pathfinder::intelligence",
                value = raw,
                "Unparseable role start date; using default tenure"
            );
            DEFAULT_TENURE_YEARS
        }
    }
}

/// Mapping role → skill → accumulated non-negative weight.
///
/// Roles and skills keep first-seen order, which later stages rely on for
/// tie-breaking and for listing a role's skills.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillIndex {
    roles: IndexMap<String, IndexMap<String, f64>>,
}

impl SkillIndex {
    /// Builds the index from every employee's held skills.
    pub fn build(employees: &[Employee], today: NaiveDate) -> Self {
        let mut roles: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();

        for employee in employees {
            let contribution =
                tenure_years(employee.in_role_since.as_deref(), today).min(MAX_CONTRIBUTION);
            for skill in &employee.skills {
                *roles
                    .entry(employee.job_title.clone())
                    .or_default()
                    .entry(skill.clone())
                    .or_insert(0.0) += contribution;
            }
        }

        tracing::debug!(
            target: "pathfinder::intelligence",
            roles = roles.len(),
            "Built role skill index"
        );
        Self { roles }
    }

    /// Skill weights for `role`, if any employee in that role lists a skill.
    pub fn role(&self, role: &str) -> Option<&IndexMap<String, f64>> {
        self.roles.get(role)
    }

    /// Skill names of `role` in index order; empty for unknown roles.
    pub fn role_skills(&self, role: &str) -> Vec<&str> {
        self.roles
            .get(role)
            .map(|skills| skills.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Iterates roles in first-seen order.
    pub fn roles(&self) -> impl Iterator<Item = (&str, &IndexMap<String, f64>)> {
        self.roles.iter().map(|(r, s)| (r.as_str(), s))
    }

    /// Number of indexed roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// True when no role has any skill.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
