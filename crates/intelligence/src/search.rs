//! Course catalog filtering and keyword relevance.

use pathfinder_dataset::Course;
use serde::{Deserialize, Serialize};

/// Default page size for course searches.
pub const DEFAULT_COURSE_LIMIT: usize = 10;

/// Filters and keyword for a catalog search. Empty strings count as unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseQuery {
    /// Free-text keyword matched against title, description, skill, and provider.
    pub query: Option<String>,
    /// Case-insensitive substring of the skill name.
    pub skill: Option<String>,
    /// Case-insensitive exact difficulty.
    pub difficulty: Option<String>,
    /// Case-insensitive exact language.
    pub language: Option<String>,
    /// Inclusive lower bound on duration; unknown durations count as 0.
    pub min_hours: Option<f64>,
    /// Inclusive upper bound on duration; unknown durations count as 0.
    pub max_hours: Option<f64>,
    /// Maximum items returned.
    pub limit: usize,
}

impl Default for CourseQuery {
    fn default() -> Self {
        Self {
            query: None,
            skill: None,
            difficulty: None,
            language: None,
            min_hours: None,
            max_hours: None,
            limit: DEFAULT_COURSE_LIMIT,
        }
    }
}

/// Search outcome: match count before truncation and the truncated items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseResults {
    /// Number of courses that passed every filter.
    pub total: usize,
    /// At most `limit` of those courses.
    pub items: Vec<Course>,
}

fn lowered(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Number of searchable fields containing `needle` (already lowercased).
pub fn relevance(course: &Course, needle: &str) -> usize {
    [
        course.title.as_str(),
        course.description.as_deref().unwrap_or(""),
        course.skill_name.as_str(),
        course.provider.as_str(),
    ]
    .iter()
    .filter(|field| field.to_lowercase().contains(needle))
    .count()
}

/// Applies the filters in order, then ranks by keyword relevance when a
/// keyword is given. Courses with zero relevance are dropped; ties keep
/// catalog order.
pub fn find_courses(courses: &[Course], query: &CourseQuery) -> CourseResults {
    let skill = lowered(&query.skill);
    let difficulty = lowered(&query.difficulty);
    let language = lowered(&query.language);

    let filtered = courses
        .iter()
        .filter(|c| {
            skill
                .as_deref()
                .is_none_or(|s| c.skill_name.to_lowercase().contains(s))
        })
        .filter(|c| {
            difficulty
                .as_deref()
                .is_none_or(|d| c.difficulty.to_lowercase() == d)
        })
        .filter(|c| {
            language
                .as_deref()
                .is_none_or(|l| c.language.to_lowercase() == l)
        })
        .filter(|c| query.min_hours.is_none_or(|min| c.effective_hours() >= min))
        .filter(|c| query.max_hours.is_none_or(|max| c.effective_hours() <= max));

    let matches: Vec<&Course> = match lowered(&query.query) {
        Some(needle) => {
            let mut scored: Vec<(&Course, usize)> = filtered
                .map(|c| (c, relevance(c, &needle)))
                .filter(|(_, score)| *score > 0)
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            scored.into_iter().map(|(c, _)| c).collect()
        }
        None => filtered.collect(),
    };

    tracing::debug!(
        target: "pathfinder::intelligence",
        total = matches.len(),
        limit = query.limit,
        "Course search complete"
    );

    CourseResults {
        total: matches.len(),
        items: matches.into_iter().take(query.limit).cloned().collect(),
    }
}
