//! tm-ledger - Ledger database layer for Tidemark.
//!
//! Owns the DuckDB connection, the ledger table that records applied
//! migration scripts, and the reconciler that compares candidate scripts
//! against the ledger and applies the difference in one transaction.

pub mod connection;
pub mod error;
pub mod ledger;
pub mod reconciler;

pub use connection::LedgerDb;
pub use error::{LedgerError, LedgerResult};
pub use reconciler::{
    pending, status, upgrade, upgrade_dir, upgrade_with_items, LedgerStatus,
};
