//! Employee repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_employees` left-joins role, department and the manager row, so an
//!   employee is listed even when none of them resolve.
//! - `update_employee_role` touching zero rows is reported as `NotFound`.
//! - Manager chains are stored as given; cycles are not rejected.

use super::{parse_salary, RecordKind, RepoError, RepoResult};
use crate::model::employee::{Employee, EmployeeChoice, EmployeeListing, NewEmployee};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EMPLOYEE_RETURNING: &str = "RETURNING id, first_name, last_name, role_id, manager_id";

/// Repository interface for employees.
pub trait EmployeeRepository {
    /// Employees with job title, department, salary and manager name.
    fn list_employees(&self) -> RepoResult<Vec<EmployeeListing>>;
    /// Id and name of every employee, for selection prompts.
    fn list_employee_choices(&self) -> RepoResult<Vec<EmployeeChoice>>;
    /// Inserts one employee and returns the persisted row.
    fn insert_employee(&self, employee: &NewEmployee) -> RepoResult<Employee>;
    /// Points `employee_id` at `role_id` and returns the updated row.
    fn update_employee_role(&self, employee_id: i64, role_id: i64) -> RepoResult<Employee>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn list_employees(&self) -> RepoResult<Vec<EmployeeListing>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                e.id,
                e.first_name,
                e.last_name,
                r.title AS job_title,
                d.name AS department,
                r.salary,
                m.first_name AS manager_first_name,
                m.last_name AS manager_last_name
             FROM employee e
             LEFT JOIN role r ON e.role_id = r.id
             LEFT JOIN department d ON r.department_id = d.id
             LEFT JOIN employee m ON e.manager_id = m.id
             ORDER BY e.id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            let id: i64 = row.get("id")?;
            let salary = parse_salary(
                row.get("salary")?,
                &format!("role.salary listed for employee {id}"),
            )?;
            employees.push(EmployeeListing {
                id,
                first_name: row.get("first_name")?,
                last_name: row.get("last_name")?,
                job_title: row.get("job_title")?,
                department: row.get("department")?,
                salary,
                manager_first_name: row.get("manager_first_name")?,
                manager_last_name: row.get("manager_last_name")?,
            });
        }
        Ok(employees)
    }

    fn list_employee_choices(&self) -> RepoResult<Vec<EmployeeChoice>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name FROM employee ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut choices = Vec::new();
        while let Some(row) = rows.next()? {
            choices.push(EmployeeChoice {
                id: row.get("id")?,
                first_name: row.get("first_name")?,
                last_name: row.get("last_name")?,
            });
        }
        Ok(choices)
    }

    fn insert_employee(&self, employee: &NewEmployee) -> RepoResult<Employee> {
        employee.validate()?;

        let created = self.conn.query_row(
            &format!(
                "INSERT INTO employee (first_name, last_name, role_id, manager_id)
                 VALUES (?1, ?2, ?3, ?4)
                 {EMPLOYEE_RETURNING};"
            ),
            params![
                employee.first_name.as_str(),
                employee.last_name.as_str(),
                employee.role_id,
                employee.manager_id,
            ],
            parse_employee_row,
        )?;
        Ok(created)
    }

    fn update_employee_role(&self, employee_id: i64, role_id: i64) -> RepoResult<Employee> {
        let updated = self
            .conn
            .query_row(
                &format!("UPDATE employee SET role_id = ?1 WHERE id = ?2 {EMPLOYEE_RETURNING};"),
                params![role_id, employee_id],
                parse_employee_row,
            )
            .optional()?;

        updated.ok_or(RepoError::NotFound {
            kind: RecordKind::Employee,
            id: employee_id,
        })
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        role_id: row.get("role_id")?,
        manager_id: row.get("manager_id")?,
    })
}
