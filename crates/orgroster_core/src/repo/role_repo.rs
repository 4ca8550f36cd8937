//! Role repository contract and SQLite implementation.
//!
//! # Invariants
//! - `list_roles` inner-joins `department`: a role whose department is gone
//!   is left out of the listing.
//! - `insert_role` does not pre-check `department_id`; the foreign key
//!   constraint rejects dangling references.

use super::{parse_salary, RepoError, RepoResult};
use crate::model::role::{NewRole, Role, RoleListing};
use rusqlite::{params, Connection, Row};

/// Repository interface for roles.
pub trait RoleRepository {
    /// Roles joined with their department name, ordered by role id.
    fn list_roles(&self) -> RepoResult<Vec<RoleListing>>;
    /// Inserts one role and returns the persisted row.
    fn insert_role(&self, role: &NewRole) -> RepoResult<Role>;
    /// Returns whether a role with `id` exists.
    fn role_exists(&self, id: i64) -> RepoResult<bool>;
}

/// SQLite-backed role repository.
pub struct SqliteRoleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRoleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RoleRepository for SqliteRoleRepository<'_> {
    fn list_roles(&self) -> RepoResult<Vec<RoleListing>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                role.id,
                role.title,
                role.salary,
                department.name AS department
             FROM role
             INNER JOIN department ON role.department_id = department.id
             ORDER BY role.id ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut roles = Vec::new();
        while let Some(row) = rows.next()? {
            let id: i64 = row.get("id")?;
            let context = format!("role.salary of role {id}");
            let salary = parse_salary(row.get("salary")?, &context)?
                .ok_or_else(|| RepoError::InvalidData(format!("missing salary in {context}")))?;
            roles.push(RoleListing {
                id,
                title: row.get("title")?,
                salary,
                department: row.get("department")?,
            });
        }
        Ok(roles)
    }

    fn insert_role(&self, role: &NewRole) -> RepoResult<Role> {
        role.validate()?;

        let created = self.conn.query_row(
            "INSERT INTO role (title, salary, department_id)
             VALUES (?1, ?2, ?3)
             RETURNING id, title, salary, department_id;",
            params![role.title.as_str(), role.salary, role.department_id],
            parse_role_row,
        )?;
        Ok(created)
    }

    fn role_exists(&self, id: i64) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM role WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn parse_role_row(row: &Row<'_>) -> rusqlite::Result<Role> {
    Ok(Role {
        id: row.get("id")?,
        title: row.get("title")?,
        salary: row.get("salary")?,
        department_id: row.get("department_id")?,
    })
}
