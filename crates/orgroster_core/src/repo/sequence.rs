//! Identity counter reconciliation.
//!
//! Seed scripts insert rows with explicit ids. The `AUTOINCREMENT` counter kept
//! in `sqlite_sequence` can then disagree with the data, so before a department
//! insert the counter is reset to the table's current maximum id.
//!
//! # Invariants
//! - After reconciliation the next generated id is `max(id) + 1`, or `1` for an
//!   empty table.
//! - Reconciling twice with no insert in between changes nothing.
//! - Only departments are reconciled. Role and employee inserts use the counter
//!   as-is.

use super::{RecordKind, RepoResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Resets the identity counter of `kind` to its table's maximum id.
///
/// Returns the floor the counter now holds (`0` for an empty table).
pub fn reconcile_identity(conn: &Connection, kind: RecordKind) -> RepoResult<i64> {
    let table = kind.table_name();
    // Table names come from a closed enum; only values are bound.
    let floor: i64 = conn.query_row(
        &format!("SELECT COALESCE(MAX(id), 0) FROM {table};"),
        [],
        |row| row.get(0),
    )?;

    let updated = conn.execute(
        "UPDATE sqlite_sequence SET seq = ?2 WHERE name = ?1;",
        params![table, floor],
    )?;
    if updated == 0 {
        conn.execute(
            "INSERT INTO sqlite_sequence (name, seq) VALUES (?1, ?2);",
            params![table, floor],
        )?;
    }

    debug!("event=sequence_reconcile module=repo status=ok table={table} floor={floor}");
    Ok(floor)
}

/// Returns the id the next store-generated insert into `kind` would receive.
pub fn next_identity(conn: &Connection, kind: RecordKind) -> RepoResult<i64> {
    let table = kind.table_name();
    let counter: Option<i64> = conn
        .query_row(
            "SELECT seq FROM sqlite_sequence WHERE name = ?1;",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    let max_id: i64 = conn.query_row(
        &format!("SELECT COALESCE(MAX(id), 0) FROM {table};"),
        [],
        |row| row.get(0),
    )?;

    Ok(counter.unwrap_or(0).max(max_id) + 1)
}
