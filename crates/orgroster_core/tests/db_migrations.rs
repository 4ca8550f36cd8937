use orgroster_core::db::migrations::latest_version;
use orgroster_core::db::seed::apply_demo_seed;
use orgroster_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "department");
    assert_table_exists(&conn, "role");
    assert_table_exists(&conn, "employee");
}

#[test]
fn foreign_keys_are_enforced_on_open() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn reopening_file_database_keeps_rows_and_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let conn = open_db(&path).unwrap();
    conn.execute("INSERT INTO department (name) VALUES ('Legal');", [])
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM department;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(err
        .to_string()
        .contains("roster schema version 999 is newer than this build supports"));
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn sqlite_failures_are_wrapped_with_source() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened as a database file.
    let err = open_db(dir.path()).unwrap_err();

    assert!(matches!(err, DbError::Sqlite(_)));
    assert!(err.to_string().starts_with("roster database error:"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn demo_seed_runs_once() {
    let mut conn = open_db_in_memory().unwrap();

    assert!(apply_demo_seed(&mut conn).unwrap());
    assert!(!apply_demo_seed(&mut conn).unwrap());

    let employees: i64 = conn
        .query_row("SELECT COUNT(*) FROM employee;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(employees, 8);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
