//! Organization roster use-case service.
//!
//! # Invariants
//! - Input is validated before any store access; a rejected request issues
//!   no store call at all.
//! - Department inserts run identity reconciliation first. Role and employee
//!   inserts do not.
//! - `update_employee_role` checks the role before mutating anything.

use crate::model::department::{Department, NewDepartment};
use crate::model::employee::{Employee, EmployeeChoice, EmployeeListing, NewEmployee};
use crate::model::role::{NewRole, Role, RoleListing};
use crate::model::validation::{
    optional_id, required_id, required_salary, required_text, ValidationError,
};
use crate::repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
use crate::repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
use crate::repo::role_repo::{RoleRepository, SqliteRoleRepository};
use crate::repo::{RecordKind, RepoError};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type OrgResult<T> = Result<T, OrgError>;

/// Errors surfaced by roster actions.
#[derive(Debug)]
pub enum OrgError {
    /// Required input missing, blank or not numeric.
    Validation(ValidationError),
    /// Referenced role does not exist.
    RoleNotFound(i64),
    /// Referenced employee does not exist.
    EmployeeNotFound(i64),
    /// Store failure, tagged with the operation that hit it.
    Store {
        operation: &'static str,
        source: RepoError,
    },
}

impl OrgError {
    // Role existence is checked up front in `update_employee_role`, so only
    // the employee update can come back as a not-found repository error.
    fn store(operation: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound {
                kind: RecordKind::Employee,
                id,
            } => Self::EmployeeNotFound(id),
            other => Self::Store {
                operation,
                source: other,
            },
        }
    }
}

impl Display for OrgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::RoleNotFound(id) => write!(f, "role not found: {id}"),
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::Store { operation, source } => write!(f, "{operation} failed: {source}"),
        }
    }
}

impl Error for OrgError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store { source, .. } => Some(source),
            Self::RoleNotFound(_) | Self::EmployeeNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for OrgError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Roster service facade used by the menu session.
pub struct OrgService<D, R, E> {
    departments: D,
    roles: R,
    employees: E,
}

impl<'conn>
    OrgService<
        SqliteDepartmentRepository<'conn>,
        SqliteRoleRepository<'conn>,
        SqliteEmployeeRepository<'conn>,
    >
{
    /// Builds a service whose repositories share one SQLite connection.
    pub fn sqlite(conn: &'conn Connection) -> Self {
        Self::new(
            SqliteDepartmentRepository::new(conn),
            SqliteRoleRepository::new(conn),
            SqliteEmployeeRepository::new(conn),
        )
    }
}

impl<D, R, E> OrgService<D, R, E>
where
    D: DepartmentRepository,
    R: RoleRepository,
    E: EmployeeRepository,
{
    pub fn new(departments: D, roles: R, employees: E) -> Self {
        Self {
            departments,
            roles,
            employees,
        }
    }

    pub fn view_departments(&self) -> OrgResult<Vec<Department>> {
        self.departments
            .list_departments()
            .map_err(|err| OrgError::store("view_departments", err))
    }

    pub fn view_roles(&self) -> OrgResult<Vec<RoleListing>> {
        self.roles
            .list_roles()
            .map_err(|err| OrgError::store("view_roles", err))
    }

    pub fn view_employees(&self) -> OrgResult<Vec<EmployeeListing>> {
        self.employees
            .list_employees()
            .map_err(|err| OrgError::store("view_employees", err))
    }

    /// Adds a department named `name` (trimmed).
    ///
    /// # Errors
    /// - `Validation` when `name` is blank; nothing is sent to the store.
    /// - `Store` when reconciliation or the insert fails.
    pub fn add_department(&self, name: &str) -> OrgResult<Department> {
        let request = NewDepartment {
            name: required_text("name", name)?,
        };

        self.departments
            .reconcile_identity()
            .map_err(|err| OrgError::store("add_department", err))?;
        let created = self
            .departments
            .insert_department(&request)
            .map_err(|err| OrgError::store("add_department", err))?;

        info!(
            "event=department_add module=service status=ok id={}",
            created.id
        );
        Ok(created)
    }

    /// Adds a role. A `department_id` with no matching department is rejected
    /// by the store and comes back as `Store`.
    pub fn add_role(&self, title: &str, salary: &str, department_id: &str) -> OrgResult<Role> {
        let request = NewRole {
            title: required_text("title", title)?,
            salary: required_salary(salary)?,
            department_id: required_id("department_id", department_id)?,
        };

        let created = self
            .roles
            .insert_role(&request)
            .map_err(|err| OrgError::store("add_role", err))?;

        info!(
            "event=role_add module=service status=ok id={} department_id={}",
            created.id, created.department_id
        );
        Ok(created)
    }

    /// Adds an employee. Blank `manager_id` input stores `NULL`.
    pub fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        role_id: &str,
        manager_id: &str,
    ) -> OrgResult<Employee> {
        let request = NewEmployee {
            first_name: required_text("first_name", first_name)?,
            last_name: required_text("last_name", last_name)?,
            role_id: required_id("role_id", role_id)?,
            manager_id: optional_id("manager_id", manager_id)?,
        };

        let created = self
            .employees
            .insert_employee(&request)
            .map_err(|err| OrgError::store("add_employee", err))?;

        info!(
            "event=employee_add module=service status=ok id={} role_id={} has_manager={}",
            created.id,
            created.role_id,
            created.manager_id.is_some()
        );
        Ok(created)
    }

    /// Employees offered by the role update selection prompt.
    pub fn employee_choices(&self) -> OrgResult<Vec<EmployeeChoice>> {
        self.employees
            .list_employee_choices()
            .map_err(|err| OrgError::store("employee_choices", err))
    }

    /// Moves `employee_id` to the role given as text.
    ///
    /// # Errors
    /// - `Validation` when `role_id` is blank or not an integer.
    /// - `RoleNotFound` when no such role exists; the employee is untouched.
    /// - `EmployeeNotFound` when the update matches no employee.
    pub fn update_employee_role(&self, employee_id: i64, role_id: &str) -> OrgResult<Employee> {
        let role_id = required_id("role_id", role_id)?;

        let role_exists = self
            .roles
            .role_exists(role_id)
            .map_err(|err| OrgError::store("update_employee_role", err))?;
        if !role_exists {
            return Err(OrgError::RoleNotFound(role_id));
        }

        let updated = self
            .employees
            .update_employee_role(employee_id, role_id)
            .map_err(|err| OrgError::store("update_employee_role", err))?;

        info!(
            "event=employee_role_update module=service status=ok id={} role_id={}",
            updated.id, updated.role_id
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::OrgError;
    use crate::model::validation::ValidationError;
    use crate::repo::{RecordKind, RepoError};

    #[test]
    fn store_maps_employee_not_found_and_validation() {
        let err = OrgError::store(
            "update_employee_role",
            RepoError::NotFound {
                kind: RecordKind::Employee,
                id: 7,
            },
        );
        assert!(matches!(err, OrgError::EmployeeNotFound(7)));

        let err = OrgError::store(
            "add_department",
            RepoError::Validation(ValidationError::MissingField("name")),
        );
        assert!(matches!(err, OrgError::Validation(_)));
    }

    #[test]
    fn store_keeps_other_failures_tagged_with_operation() {
        let err = OrgError::store(
            "view_roles",
            RepoError::NotFound {
                kind: RecordKind::Role,
                id: 3,
            },
        );
        assert!(matches!(
            err,
            OrgError::Store {
                operation: "view_roles",
                source: RepoError::NotFound { .. }
            }
        ));
        assert_eq!(err.to_string(), "view_roles failed: role not found: 3");
    }
}
