use serde::{Deserialize, Deserializer, Serialize};

/// Proficiency level attached to a competency record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetencyLevel {
    /// Entry level.
    Beginner,
    /// Working knowledge.
    Intermediate,
    /// Strong, independent practitioner.
    Advanced,
    /// Recognised authority.
    Expert,
}

impl CompetencyLevel {
    /// Parses the exact level label used in the employee extract.
    ///
    /// ```
    /// use pathfinder_dataset::CompetencyLevel;
    ///
    /// assert_eq!(CompetencyLevel::parse("Expert"), Some(CompetencyLevel::Expert));
    /// assert_eq!(CompetencyLevel::parse("expert"), None);
    /// ```
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Beginner" => Some(Self::Beginner),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            "Expert" => Some(Self::Expert),
            _ => None,
        }
    }

    /// Weight of this level in the leadership-potential competency component.
    pub fn weight(self) -> f64 {
        match self {
            Self::Beginner => 0.25,
            Self::Intermediate => 0.5,
            Self::Advanced => 0.85,
            Self::Expert => 1.0,
        }
    }
}

/// Keeps string values and drops anything else, so a stray number or object in
/// a free-text field never rejects the whole record.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}

/// A competency record from the employee extract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Competency {
    /// Competency name.
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    /// Raw level label as found in the source; non-string values read as `None`.
    #[serde(default, deserialize_with = "string_or_none")]
    pub level: Option<String>,
}

impl Competency {
    /// Recognised level, or `None` when the label is absent or unknown.
    pub fn level(&self) -> Option<CompetencyLevel> {
        self.level.as_deref().and_then(CompetencyLevel::parse)
    }
}

/// A prior position held by an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Title of the role held.
    #[serde(default, deserialize_with = "string_or_none")]
    pub role_title: Option<String>,
}

/// A project the employee contributed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Free-form outcome entries; only their count is used for scoring.
    #[serde(default)]
    pub outcomes: Vec<serde_json::Value>,
}

/// One employee, flattened from the nested profile record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    /// Unique key.
    pub email: String,
    /// Current job title, used as the role key.
    pub job_title: String,
    /// Department name.
    pub department: String,
    /// Organisational unit.
    pub unit: String,
    /// Start of the current role, `YYYY-MM-DD`, unvalidated.
    pub in_role_since: Option<String>,
    /// Skill names in source order.
    pub skills: Vec<String>,
    /// Competency records.
    pub competencies: Vec<Competency>,
    /// Prior positions, oldest first as given by the source.
    pub positions_history: Vec<Position>,
    /// Projects.
    pub projects: Vec<Project>,
}

impl Employee {
    /// Returns true if the employee lists `skill` verbatim.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Total outcome count across all projects.
    pub fn outcome_count(&self) -> usize {
        self.projects.iter().map(|p| p.outcomes.len()).sum()
    }
}

/// One row of the skills taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyRow {
    /// Function area (e.g. "Technology").
    pub function_area: String,
    /// Specialization within the function area.
    pub specialization: String,
    /// Skill name.
    pub skill_name: String,
}

/// One row of the course catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course title.
    pub title: String,
    /// Skill taught.
    pub skill_name: String,
    /// Course provider.
    pub provider: String,
    /// Difficulty label, compared case-insensitively.
    pub difficulty: String,
    /// Duration in hours; `None` when absent or unparseable.
    pub duration_hours: Option<f64>,
    /// Delivery language.
    pub language: String,
    /// Course link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Course description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Course {
    /// Duration used in range filters: unknown durations count as zero.
    pub fn effective_hours(&self) -> f64 {
        self.duration_hours.unwrap_or(0.0)
    }
}
