use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use thiserror::Error;

use super::model::{Division, Employee, Gender};

/// Field separator used by the source files.
const SEPARATOR: u8 = b';';
/// Birth date pattern, e.g. `03.12.1948`.
const DATE_FORMAT: &str = "%d.%m.%Y";
/// Minimum number of fields a data row must have to be considered at all.
const FIELD_COUNT: usize = 6;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading a roster file.
///
/// A missing source file is fatal before any row is read. The three
/// per-field variants are also fatal: the first invalid id, birth date or
/// salary aborts the whole load and no partial result is returned. Rows with
/// fewer than six fields are not errors; they are skipped silently.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid id: {value:?}")]
    InvalidId { line: u64, value: String },

    #[error("line {line}: invalid birth date: {value:?} (expected dd.mm.yyyy)")]
    InvalidBirthDate { line: u64, value: String },

    #[error("line {line}: invalid salary: {value:?}")]
    InvalidSalary { line: u64, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load an employee roster from a `;`-separated CSV file.
///
/// The first line is a header and is discarded. Records are returned in file
/// order. A nonexistent path fails with [`LoadError::SourceNotFound`].
pub fn load_file(path: &Path) -> Result<Vec<Employee>, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_records(file)
}

/// Parse roster records from any reader (file, buffer, socket, ...).
///
/// Same semantics as [`load_file`], minus the file handling.
pub fn parse_records<R: Read>(source: R) -> Result<Vec<Employee>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(SEPARATOR)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let mut employees = Vec::new();
    // Division cache: rows sharing a division name share one Arc<Division>.
    // Scoped to this call; two loads never share instances.
    let mut divisions: HashMap<String, Arc<Division>> = HashMap::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < FIELD_COUNT {
            log::debug!("line {line}: skipping row with {} fields", record.len());
            continue;
        }
        employees.push(parse_employee(&record, line, &mut divisions)?);
    }

    Ok(employees)
}

// ---------------------------------------------------------------------------
// Per-row parsing
// ---------------------------------------------------------------------------

/// Convert one raw row (≥6 fields) into an [`Employee`].
///
/// Field order: `id;name;gender;birth_date;division;salary`. All fields are
/// trimmed before interpretation.
fn parse_employee(
    record: &csv::StringRecord,
    line: u64,
    divisions: &mut HashMap<String, Arc<Division>>,
) -> Result<Employee, LoadError> {
    let field = |i: usize| record.get(i).unwrap_or("").trim();

    let id = field(0).parse::<i64>().map_err(|_| LoadError::InvalidId {
        line,
        value: field(0).to_string(),
    })?;

    let name = field(1).to_string();
    let gender = Gender::from_field(field(2));

    let birth_date = NaiveDate::parse_from_str(field(3), DATE_FORMAT).map_err(|_| {
        LoadError::InvalidBirthDate {
            line,
            value: field(3).to_string(),
        }
    })?;

    let division = divisions
        .entry(field(4).to_string())
        .or_insert_with(|| Arc::new(Division::new(field(4))))
        .clone();

    let salary = field(5)
        .parse::<i64>()
        .map_err(|_| LoadError::InvalidSalary {
            line,
            value: field(5).to_string(),
        })?;

    Ok(Employee {
        id,
        name,
        gender,
        birth_date,
        division,
        salary,
    })
}
