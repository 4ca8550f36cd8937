//! Department repository contract and SQLite implementation.

use super::sequence::reconcile_identity;
use super::{RecordKind, RepoResult};
use crate::model::department::{Department, NewDepartment};
use rusqlite::{Connection, Row};

/// Repository interface for departments.
pub trait DepartmentRepository {
    /// Full scan ordered by id. An empty table yields an empty list.
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    /// Resets the department identity counter. Returns the counter floor.
    fn reconcile_identity(&self) -> RepoResult<i64>;
    /// Inserts one department and returns the persisted row.
    fn insert_department(&self, department: &NewDepartment) -> RepoResult<Department>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM department ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }
        Ok(departments)
    }

    fn reconcile_identity(&self) -> RepoResult<i64> {
        reconcile_identity(self.conn, RecordKind::Department)
    }

    fn insert_department(&self, department: &NewDepartment) -> RepoResult<Department> {
        department.validate()?;

        let created = self.conn.query_row(
            "INSERT INTO department (name) VALUES (?1) RETURNING id, name;",
            [department.name.as_str()],
            parse_department_row,
        )?;
        Ok(created)
    }
}

fn parse_department_row(row: &Row<'_>) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
