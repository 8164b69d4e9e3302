use crate::loader::{load_courses, load_employees, load_taxonomy};
use crate::types::{Course, Employee, TaxonomyRow};
use crate::Result;
use std::path::PathBuf;

/// Locations of the three extracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// Employee profile JSON.
    pub employees: PathBuf,
    /// Skills taxonomy CSV.
    pub taxonomy: PathBuf,
    /// Course catalog CSV.
    pub courses: PathBuf,
}

/// A read-only view of one consistent set of extracts.
///
/// Everything in the intelligence layer is a pure function of a snapshot, so a
/// snapshot built in a test behaves exactly like one loaded from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Employees in file order.
    pub employees: Vec<Employee>,
    /// Taxonomy rows in file order.
    pub taxonomy: Vec<TaxonomyRow>,
    /// Catalog courses in file order.
    pub courses: Vec<Course>,
}

impl Snapshot {
    /// Loads all three extracts. Any failure aborts the whole load.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let snapshot = Self {
            employees: load_employees(&paths.employees)?,
            taxonomy: load_taxonomy(&paths.taxonomy)?,
            courses: load_courses(&paths.courses)?,
        };
        tracing::info!(
            target: "pathfinder::dataset",
            employees = snapshot.employees.len(),
            taxonomy = snapshot.taxonomy.len(),
            courses = snapshot.courses.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    /// First employee with the given email.
    pub fn employee(&self, email: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.email == email)
    }
}
