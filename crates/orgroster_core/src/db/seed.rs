//! Demo seed data.
//!
//! Rows are inserted with explicit ids, so identity counters are left wherever
//! SQLite put them. Department inserts reconcile the counter before writing.

use super::DbResult;
use log::info;
use rusqlite::Connection;

const DEMO_SEED_SQL: &str = include_str!("seed/demo.sql");

/// Inserts the demo roster when the `department` table is empty.
///
/// Returns `true` when rows were written, `false` when existing data was left
/// untouched.
pub fn apply_demo_seed(conn: &mut Connection) -> DbResult<bool> {
    let tx = conn.transaction()?;
    let existing: i64 = tx.query_row("SELECT COUNT(*) FROM department;", [], |row| row.get(0))?;
    if existing > 0 {
        info!("event=db_seed module=db status=skipped existing_departments={existing}");
        return Ok(false);
    }

    tx.execute_batch(DEMO_SEED_SQL)?;
    tx.commit()?;
    info!("event=db_seed module=db status=ok");
    Ok(true)
}
