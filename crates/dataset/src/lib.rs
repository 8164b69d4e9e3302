//! Loading of the flat-file HR extracts that feed the pathfinder engine.
//!
//! This crate provides:
//! - Typed entities for employees, taxonomy rows, and catalog courses.
//! - A declarative alias table that maps arbitrarily named CSV headers onto
//!   canonical fields.
//! - A [`Snapshot`] that bundles all three inputs into one read-only value.
//!
//! # Examples
//!
//! ```
//! use pathfinder_dataset::read_taxonomy;
//!
//! let csv = "Function Area,Specialization,Skill\nTechnology,Cloud,Kubernetes\n";
//! let rows = read_taxonomy(csv.as_bytes(), "taxonomy.csv").unwrap();
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].skill_name, "Kubernetes");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// File loaders for the three extracts.
pub mod loader;
/// Canonical column resolution for CSV headers.
pub mod schema;
/// Bundled read-only view of a full dataset.
pub mod snapshot;
/// Entity types produced by the loaders.
pub mod types;

pub use loader::{
    load_courses, load_employees, load_taxonomy, parse_employees, read_courses, read_taxonomy,
};
pub use schema::{resolve_columns, Alias, ColumnSpec, ResolvedColumns, COURSE_COLUMNS, TAXONOMY_COLUMNS};
pub use snapshot::{DataPaths, Snapshot};
pub use types::{Competency, CompetencyLevel, Course, Employee, Position, Project, TaxonomyRow};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an extract.
///
/// Every variant is fatal for the load that produced it; callers never get a
/// partially populated result.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Employee JSON is malformed or a required nested field is missing.
    #[error("invalid employee data in {}: {source}", path.display())]
    Json {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error, naming the missing field when applicable.
        source: serde_json::Error,
    },

    /// CSV framing error.
    #[error("invalid CSV in {}: {source}", path.display())]
    Csv {
        /// File that failed.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// A required canonical field matched no header.
    #[error("{} is missing required column '{field}'; found columns: {columns:?}", path.display())]
    MissingColumn {
        /// File that failed.
        path: PathBuf,
        /// Canonical field name.
        field: &'static str,
        /// Headers actually present.
        columns: Vec<String>,
    },

    /// More than one header matched a single canonical field.
    #[error("{} has ambiguous columns for '{field}': {candidates:?}", path.display())]
    AmbiguousColumn {
        /// File that failed.
        path: PathBuf,
        /// Canonical field name.
        field: &'static str,
        /// Headers that all matched.
        candidates: Vec<String>,
    },
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, LoadError>;
