//! Role rows and the role listing read model.

use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Persisted `role` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

/// Insert request for a role.
///
/// `department_id` is not checked against `department`; the foreign key
/// constraint rejects dangling references at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

impl NewRole {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if !self.salary.is_finite() {
            return Err(ValidationError::NonFiniteSalary(self.salary));
        }
        Ok(())
    }
}

/// One row of the "view roles" listing: role joined with its department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department: String,
}
