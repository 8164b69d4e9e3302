use crate::{LoadError, Result};
use std::path::Path;

/// One way a header can match a canonical field.
///
/// Headers are trimmed and lowercased before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alias {
    /// Header contains every listed fragment.
    AllOf(&'static [&'static str]),
    /// Header equals the value.
    Exact(&'static str),
}

impl Alias {
    fn matches(&self, header: &str) -> bool {
        match self {
            Alias::AllOf(parts) => parts.iter().all(|p| header.contains(p)),
            Alias::Exact(value) => header == *value,
        }
    }
}

/// Canonical field and the aliases that resolve to it.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Canonical field name.
    pub field: &'static str,
    /// Whether loading fails when no header matches.
    pub required: bool,
    /// Any alias matching is sufficient.
    pub aliases: &'static [Alias],
}

/// Column table for the skills taxonomy.
pub const TAXONOMY_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        field: "function_area",
        required: true,
        aliases: &[Alias::AllOf(&["function", "area"])],
    },
    ColumnSpec {
        field: "specialization",
        required: true,
        aliases: &[Alias::AllOf(&["special"])],
    },
    ColumnSpec {
        field: "skill_name",
        required: true,
        aliases: &[Alias::AllOf(&["skill"])],
    },
];

/// Column table for the course catalog.
pub const COURSE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        field: "title",
        required: true,
        aliases: &[Alias::AllOf(&["title"])],
    },
    ColumnSpec {
        field: "skill_name",
        required: true,
        aliases: &[Alias::AllOf(&["skill", "name"])],
    },
    ColumnSpec {
        field: "provider",
        required: true,
        aliases: &[Alias::AllOf(&["provider"])],
    },
    ColumnSpec {
        field: "difficulty",
        required: true,
        aliases: &[Alias::AllOf(&["difficulty"]), Alias::AllOf(&["level"])],
    },
    ColumnSpec {
        field: "duration_hours",
        required: true,
        aliases: &[Alias::AllOf(&["duration", "hour"])],
    },
    ColumnSpec {
        field: "language",
        required: true,
        aliases: &[Alias::AllOf(&["language"])],
    },
    ColumnSpec {
        field: "url",
        required: false,
        aliases: &[Alias::Exact("url")],
    },
    ColumnSpec {
        field: "description",
        required: false,
        aliases: &[Alias::AllOf(&["desc"])],
    },
];

/// Header positions resolved for a column table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    positions: Vec<(&'static str, Option<usize>)>,
}

impl ResolvedColumns {
    /// Header index for `field`, if it was resolved.
    pub fn index(&self, field: &str) -> Option<usize> {
        self.positions
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, idx)| *idx)
    }

    /// Trimmed cell for `field` in `record`; empty when the field or cell is absent.
    pub fn cell<'r>(&self, record: &'r csv::StringRecord, field: &str) -> &'r str {
        self.index(field)
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .unwrap_or("")
    }
}

/// Resolves `headers` against `specs`.
///
/// A field matching no header is an error when required and left unresolved
/// otherwise. A field matching more than one header is always an error.
pub fn resolve_columns(
    path: &Path,
    headers: &[String],
    specs: &[ColumnSpec],
) -> Result<ResolvedColumns> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let mut positions = Vec::with_capacity(specs.len());

    for spec in specs {
        let hits: Vec<usize> = normalized
            .iter()
            .enumerate()
            .filter(|(_, h)| spec.aliases.iter().any(|a| a.matches(h)))
            .map(|(i, _)| i)
            .collect();

        match hits.as_slice() {
            [] if spec.required => {
                return Err(LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    field: spec.field,
                    columns: headers.to_vec(),
                });
            }
            [] => positions.push((spec.field, None)),
            [idx] => positions.push((spec.field, Some(*idx))),
            many => {
                return Err(LoadError::AmbiguousColumn {
                    path: path.to_path_buf(),
                    field: spec.field,
                    candidates: many.iter().map(|&i| headers[i].clone()).collect(),
                });
            }
        }
    }

    tracing::trace!(
        target: "pathfinder::dataset",
        path = %path.display(),
        ?positions,
        "Resolved columns"
    );

    Ok(ResolvedColumns { positions })
}
