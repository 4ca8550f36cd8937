//! Employee rows, the employee listing read model and selection choices.

use super::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Persisted `employee` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    /// `None` for employees without a manager. Cycles are not checked.
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Insert request for an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

impl NewEmployee {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::MissingField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::MissingField("last_name"));
        }
        Ok(())
    }
}

/// One row of the "view employees" listing.
///
/// Every joined column is optional: the listing keeps employees whose role,
/// department or manager no longer resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub manager_first_name: Option<String>,
    pub manager_last_name: Option<String>,
}

/// Entry of the employee select prompt used by the role update action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeChoice {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl EmployeeChoice {
    /// Display label, `"first last"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
