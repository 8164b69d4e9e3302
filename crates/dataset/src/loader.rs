use crate::schema::{resolve_columns, ResolvedColumns, COURSE_COLUMNS, TAXONOMY_COLUMNS};
use crate::types::{Competency, Course, Employee, Position, Project, TaxonomyRow};
use crate::{LoadError, Result};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Deserialize)]
struct RawEmployee {
    personal_info: RawPersonalInfo,
    employment_info: RawEmploymentInfo,
    #[serde(default)]
    skills: Vec<RawSkill>,
    #[serde(default)]
    competencies: Vec<Competency>,
    #[serde(default)]
    positions_history: Vec<Position>,
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Deserialize)]
struct RawPersonalInfo {
    email: String,
}

#[derive(Deserialize)]
struct RawEmploymentInfo {
    job_title: String,
    department: String,
    unit: String,
    #[serde(default)]
    in_role_since: Option<String>,
}

#[derive(Deserialize)]
struct RawSkill {
    skill_name: String,
}

impl From<RawEmployee> for Employee {
    fn from(raw: RawEmployee) -> Self {
        Employee {
            email: raw.personal_info.email,
            job_title: raw.employment_info.job_title,
            department: raw.employment_info.department,
            unit: raw.employment_info.unit,
            in_role_since: raw.employment_info.in_role_since,
            skills: raw.skills.into_iter().map(|s| s.skill_name).collect(),
            competencies: raw.competencies,
            positions_history: raw.positions_history,
            projects: raw.projects,
        }
    }
}

/// Parses an employee array from JSON text.
///
/// `origin` is only used for error reporting.
pub fn parse_employees(json: &str, origin: impl AsRef<Path>) -> Result<Vec<Employee>> {
    let raw: Vec<RawEmployee> = serde_json::from_str(json).map_err(|source| LoadError::Json {
        path: origin.as_ref().to_path_buf(),
        source,
    })?;
    Ok(raw.into_iter().map(Employee::from).collect())
}

/// Loads the employee profile extract.
pub fn load_employees(path: impl AsRef<Path>) -> Result<Vec<Employee>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let employees = parse_employees(&content, path)?;
    tracing::debug!(
        target: "pathfinder::dataset",
        path = %path.display(),
        count = employees.len(),
        "Loaded employees"
    );
    Ok(employees)
}

/// Reads headers and records from a CSV source.
fn read_csv<R: Read>(
    reader: R,
    path: &Path,
    specs: &[crate::ColumnSpec],
) -> Result<(ResolvedColumns, Vec<csv::StringRecord>)> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    let columns = resolve_columns(path, &headers, specs)?;
    let records = rdr
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(csv_err)?;
    Ok((columns, records))
}

/// Parses a taxonomy CSV, preserving row order.
pub fn read_taxonomy<R: Read>(reader: R, origin: impl AsRef<Path>) -> Result<Vec<TaxonomyRow>> {
    let (columns, records) = read_csv(reader, origin.as_ref(), TAXONOMY_COLUMNS)?;
    Ok(records
        .iter()
        .map(|rec| TaxonomyRow {
            function_area: columns.cell(rec, "function_area").to_string(),
            specialization: columns.cell(rec, "specialization").to_string(),
            skill_name: columns.cell(rec, "skill_name").to_string(),
        })
        .collect())
}

/// Loads the skills taxonomy extract.
pub fn load_taxonomy(path: impl AsRef<Path>) -> Result<Vec<TaxonomyRow>> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_taxonomy(file, path)?;
    tracing::debug!(
        target: "pathfinder::dataset",
        path = %path.display(),
        count = rows.len(),
        "Loaded taxonomy"
    );
    Ok(rows)
}

fn optional_cell(columns: &ResolvedColumns, rec: &csv::StringRecord, field: &str) -> Option<String> {
    columns.index(field)?;
    let value = columns.cell(rec, field);
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_hours(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a course catalog CSV, preserving row order.
pub fn read_courses<R: Read>(reader: R, origin: impl AsRef<Path>) -> Result<Vec<Course>> {
    let (columns, records) = read_csv(reader, origin.as_ref(), COURSE_COLUMNS)?;
    Ok(records
        .iter()
        .map(|rec| {
            let raw_hours = columns.cell(rec, "duration_hours");
            let duration_hours = parse_hours(raw_hours);
            if duration_hours.is_none() && !raw_hours.is_empty() {
                tracing::trace!(
                    target: "pathfinder::dataset",
                    value = raw_hours,
                    "Unparseable course duration treated as unknown"
                );
            }
            Course {
                title: columns.cell(rec, "title").to_string(),
                skill_name: columns.cell(rec, "skill_name").to_string(),
                provider: columns.cell(rec, "provider").to_string(),
                difficulty: columns.cell(rec, "difficulty").to_string(),
                duration_hours,
                language: columns.cell(rec, "language").to_string(),
                url: optional_cell(&columns, rec, "url"),
                description: optional_cell(&columns, rec, "description"),
            }
        })
        .collect())
}

/// Loads the course catalog extract.
pub fn load_courses(path: impl AsRef<Path>) -> Result<Vec<Course>> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let courses = read_courses(file, path)?;
    tracing::debug!(
        target: "pathfinder::dataset",
        path = %path.display(),
        count = courses.len(),
        "Loaded courses"
    );
    Ok(courses)
}
