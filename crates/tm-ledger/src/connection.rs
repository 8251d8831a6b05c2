//! Database connection wrapper.
//!
//! [`LedgerDb`] owns a DuckDB [`Connection`] and provides helpers for
//! opening the database and running a closure inside a transaction.
//! Bootstrap of the ledger table is deliberately not part of `open`; the
//! reconciler performs it explicitly at the start of each run.

use crate::error::{LedgerError, LedgerResult};
use duckdb::Connection;
use std::path::Path;

/// Wrapper around a DuckDB connection.
///
/// Single-threaded — reconciliation is sequential, so no `Mutex` is needed.
pub struct LedgerDb {
    conn: Connection,
}

impl LedgerDb {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| LedgerError::Connection(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Open an in-memory database.
    ///
    /// Useful for unit tests that don't need persistence.
    pub fn open_memory() -> LedgerResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| LedgerError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open from a path string, treating `:memory:` specially.
    pub fn open_str(path: &str) -> LedgerResult<Self> {
        if path == ":memory:" {
            Self::open_memory()
        } else {
            Self::open(Path::new(path))
        }
    }

    /// Borrow the underlying DuckDB connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Execute `body` within a `BEGIN` / `COMMIT` transaction, rolling back
    /// on error.
    pub fn transaction<F, T>(&self, body: F) -> LedgerResult<T>
    where
        F: FnOnce(&Connection) -> LedgerResult<T>,
    {
        self.conn
            .execute_batch("BEGIN TRANSACTION")
            .map_err(|e| LedgerError::Transaction(format!("BEGIN failed: {e}")))?;

        let result = body(&self.conn);

        match &result {
            Ok(_) => {
                if let Err(commit_err) = self.conn.execute_batch("COMMIT") {
                    let _ = self.conn.execute_batch("ROLLBACK");
                    return Err(LedgerError::Transaction(format!(
                        "COMMIT failed: {commit_err}"
                    )));
                }
            }
            Err(_) => {
                let _ = self.conn.execute_batch("ROLLBACK");
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "connection_test.rs"]
mod tests;
