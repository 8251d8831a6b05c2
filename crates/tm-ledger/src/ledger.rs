//! Ledger table access: bootstrap, applied-script reads, and row inserts.
//!
//! The ledger records one row per applied script, keyed on
//! `(project, filename)`. Rows are only ever inserted, never updated or
//! deleted, and the table itself is created lazily and never dropped.

use crate::error::{LedgerError, LedgerResult};
use chrono::{DateTime, Utc};
use duckdb::Connection;
use std::collections::BTreeMap;
use tm_core::{RunConfig, TableName};

/// Check whether `table` exists in the default schema.
///
/// Uses the catalog rather than a probing `SELECT`, so a failed read here
/// means a real problem (permissions, broken connection) and is never
/// mistaken for "table absent".
pub fn table_exists(conn: &Connection, table: &TableName) -> LedgerResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'main' AND table_name = ?",
            duckdb::params![table.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| LedgerError::Read(format!("catalog lookup failed: {e}")))?;
    Ok(count > 0)
}

/// Ensure the ledger table exists, creating it on first use.
///
/// `IF NOT EXISTS` makes the create a no-op when another process wins a
/// concurrent first-run race. Create failure is fatal to the run; there is
/// no retry.
pub fn ensure_table(conn: &Connection, table: &TableName) -> LedgerResult<()> {
    if table_exists(conn, table)? {
        return Ok(());
    }

    log::info!("creating ledger table {table}");
    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS {table} (
             project        VARCHAR NOT NULL,
             filename       VARCHAR NOT NULL,
             migration_date TIMESTAMPTZ NOT NULL DEFAULT now(),
             PRIMARY KEY (project, filename)
         )"
    );
    conn.execute_batch(&ddl)
        .map_err(|e| LedgerError::Bootstrap(format!("failed to create {table}: {e}")))?;
    Ok(())
}

/// Read the applied scripts for the configured project as a map from
/// filename to applied timestamp, ordered ascending by filename.
pub fn applied(
    conn: &Connection,
    config: &RunConfig,
) -> LedgerResult<BTreeMap<String, DateTime<Utc>>> {
    let sql = format!(
        "SELECT filename, epoch_ms(migration_date) FROM {} \
         WHERE project = ? ORDER BY filename",
        config.table
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| LedgerError::Read(format!("failed to prepare ledger read: {e}")))?;

    let rows = stmt
        .query_map(duckdb::params![config.project], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| LedgerError::Read(format!("failed to query ledger: {e}")))?;

    let mut files = BTreeMap::new();
    for row in rows {
        let (filename, millis) =
            row.map_err(|e| LedgerError::Read(format!("failed to scan ledger row: {e}")))?;
        let applied_at = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            LedgerError::Read(format!("ledger row '{filename}' has an out-of-range timestamp"))
        })?;
        files.insert(filename, applied_at);
    }
    Ok(files)
}

/// Insert the ledger row for an applied script. The timestamp is
/// server-assigned by the column default.
pub fn record(conn: &Connection, config: &RunConfig, id: &str) -> LedgerResult<()> {
    let sql = format!(
        "INSERT INTO {} (project, filename) VALUES (?, ?)",
        config.table
    );
    conn.execute(&sql, duckdb::params![config.project, id])
        .map_err(|e| LedgerError::Record {
            id: id.to_string(),
            message: e.to_string(),
        })?;
    Ok(())
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
