use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("employee id is empty")]
    Empty,
    #[error("employee id {0:?} must have exactly {len} digits", len = EmployeeId::LEN)]
    Length(String),
    #[error("employee id {0:?} contains a non-digit character")]
    NotNumeric(String),
    #[error("employee id {0} does not fit in {len} digits", len = EmployeeId::LEN)]
    OutOfRange(u32),
}

/// Fixed-length numeric employee identifier.
///
/// Stored as a number and rendered zero-padded, so numeric and textual
/// order agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(u32);

impl EmployeeId {
    pub const LEN: usize = 5;
    pub const MAX: u32 = 99_999;

    pub fn new(value: u32) -> Result<Self, IdError> {
        if value > Self::MAX {
            return Err(IdError::OutOfRange(value));
        }

        Ok(EmployeeId(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for EmployeeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::NotNumeric(s.to_string()));
        }

        if s.len() != Self::LEN {
            return Err(IdError::Length(s.to_string()));
        }

        // at most 5 ascii digits, always fits
        Ok(EmployeeId(s.parse().map_err(|_| IdError::NotNumeric(s.to_string()))?))
    }
}

impl Display for EmployeeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = Self::LEN)
    }
}

/// An employee record. Identity, equality and ordering are all by `id`.
#[derive(Debug, Clone)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    salary: f64,
}

impl Employee {
    pub fn new(id: EmployeeId, name: &str, department: &str, salary: f64) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            department: department.to_string(),
            salary,
        }
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_department(&mut self, department: &str) {
        self.department = department.to_string();
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl PartialOrd for Employee {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Employee {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{:.2}",
            self.id, self.name, self.department, self.salary
        )
    }
}
