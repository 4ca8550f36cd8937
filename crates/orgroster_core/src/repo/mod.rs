//! Repository contracts and SQLite persistence for the roster tables.
//!
//! # Responsibility
//! - Define one read and one write contract per entity, plus the role
//!   reassignment write on employees.
//! - Keep SQL inside the persistence boundary.
//!
//! # Invariants
//! - Every statement binds its values; nothing is interpolated into SQL.
//! - Write paths call the request's `validate()` before touching storage.
//! - Inserts return the row as persisted, including the assigned id.
//! - No caching: every read goes back to the store.

use crate::db::DbError;
use crate::model::validation::ValidationError;
use rusqlite::types::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_repo;
pub mod employee_repo;
pub mod role_repo;
pub mod sequence;

pub type RepoResult<T> = Result<T, RepoError>;

/// Roster table a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Department,
    Role,
    Employee,
}

impl RecordKind {
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Department => "department",
            Self::Role => "role",
            Self::Employee => "employee",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Repository error for roster persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    NotFound { kind: RecordKind, id: i64 },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted roster data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Reads a stored salary, rejecting values SQLite kept as text or blobs.
///
/// `NULL` maps to `None`; callers whose column is `NOT NULL` treat that as
/// invalid too.
pub(crate) fn parse_salary(value: Value, context: &str) -> RepoResult<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Integer(amount) => Ok(Some(amount as f64)),
        Value::Real(amount) => Ok(Some(amount)),
        Value::Text(text) => Err(RepoError::InvalidData(format!(
            "non-numeric salary `{text}` in {context}"
        ))),
        Value::Blob(_) => Err(RepoError::InvalidData(format!(
            "blob salary in {context}"
        ))),
    }
}
