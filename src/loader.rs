//! Reader for whitespace-delimited employee record files.
//!
//! Every non-blank line holds `id last first department salary`. Tokens after
//! the salary are ignored.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

use crate::employee::{Employee, EmployeeId, IdError};
use crate::store::EmployeeStore;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read records: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: missing {field}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: {source}")]
    InvalidId {
        line: usize,
        #[source]
        source: IdError,
    },
    #[error("line {line}: invalid salary {value:?}")]
    InvalidSalary { line: usize, value: String },
}

/// Outcome of loading a record file into a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub duplicates: usize,
}

/// Parse one record line. `line_no` is the 1-based line number used in errors.
pub fn parse_record(line_no: usize, line: &str) -> Result<Employee, LoadError> {
    let mut tokens = line.split_whitespace();
    let mut next = |field: &'static str| {
        tokens.next().ok_or(LoadError::MissingField {
            line: line_no,
            field,
        })
    };

    let id = next("id")?;
    let last = next("last name")?;
    let first = next("first name")?;
    let department = next("department")?;
    let salary = next("salary")?;

    let id: EmployeeId = id
        .parse()
        .map_err(|source| LoadError::InvalidId {
            line: line_no,
            source,
        })?;
    let salary: f64 = salary.parse().map_err(|_| LoadError::InvalidSalary {
        line: line_no,
        value: salary.to_string(),
    })?;

    Ok(Employee::new(
        id,
        &format!("{} {}", first, last),
        department,
        salary,
    ))
}

pub fn read_employees<R: BufRead>(reader: R) -> Result<Vec<Employee>, LoadError> {
    let mut employees = Vec::new();

    for (index, text) in reader.lines().enumerate() {
        let text = text?;

        if text.trim().is_empty() {
            continue;
        }

        employees.push(parse_record(index + 1, &text)?);
    }

    Ok(employees)
}

/// Insert every record of the file into the store.
///
/// Duplicate ids are skipped and counted, they do not fail the load.
pub fn load_file<S, P>(path: P, store: &mut S) -> Result<LoadReport, LoadError>
where
    S: EmployeeStore,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let employees = read_employees(BufReader::new(File::open(path)?))?;
    log::debug!("read {} records from {}", employees.len(), path.display());

    Ok(insert_all(store, employees))
}

pub fn insert_all<S, I>(store: &mut S, employees: I) -> LoadReport
where
    S: EmployeeStore,
    I: IntoIterator<Item = Employee>,
{
    let mut report = LoadReport::default();

    for employee in employees {
        match store.insert(employee) {
            Ok(()) => report.inserted += 1,
            Err(rejected) => {
                log::warn!("skipping duplicate employee id {}", rejected.id());
                report.duplicates += 1;
            }
        }
    }

    report
}
