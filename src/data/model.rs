use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Gender – two-valued enumeration with a documented fallback
// ---------------------------------------------------------------------------

/// Employee gender as recorded in the source file.
///
/// The source format only distinguishes the literal `Male` (case-insensitive);
/// every other value, including `Female`, maps to [`Gender::Female`]. There is
/// deliberately no "unknown" variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a raw CSV field. Never fails: anything that is not `Male`
    /// (ignoring case) is `Female`.
    pub fn from_field(field: &str) -> Self {
        if field.trim().eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

// ---------------------------------------------------------------------------
// Division – a named grouping entity, shared between employees
// ---------------------------------------------------------------------------

/// A division referenced by one or more employees.
///
/// Identity is the name string. Within one load, employees with the same
/// division name hold clones of the same `Arc<Division>`, so sharing can be
/// observed with [`Arc::ptr_eq`].
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Division {
    pub name: String,
}

impl Division {
    pub fn new(name: impl Into<String>) -> Self {
        Division { name: name.into() }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ---------------------------------------------------------------------------
// Employee – one row of the source file
// ---------------------------------------------------------------------------

/// A single employee record. Immutable after loading.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub division: Arc<Division>,
    pub salary: i64,
}

// -- Manual PartialEq/Hash: identity is the id alone --

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}, born {}, {}, salary {})",
            self.id, self.name, self.gender, self.birth_date, self.division, self.salary
        )
    }
}
