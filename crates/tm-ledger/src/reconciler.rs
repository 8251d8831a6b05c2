//! The migration reconciler.
//!
//! Compares candidate scripts against the ledger and applies the
//! difference: bootstrap the ledger table, compute the pending set, then
//! execute and record every pending script inside one transaction. A run
//! either applies all of its pending scripts or none of them; scripts
//! committed by earlier runs are never touched.

use crate::connection::LedgerDb;
use crate::error::{LedgerError, LedgerResult};
use crate::ledger;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::Path;
use tm_core::{discover_scripts, order_items, MigrationItem, RunConfig, DEFAULT_SCRIPTS_DIR};

/// Apply all pending scripts from the conventional `migrations/` directory
/// using the default ledger table.
pub fn upgrade(db: &LedgerDb, project: &str) -> LedgerResult<()> {
    let config = RunConfig::for_project(project);
    upgrade_dir(db, &config, Path::new(DEFAULT_SCRIPTS_DIR))
}

/// Apply all pending scripts discovered in `dir`.
pub fn upgrade_dir(db: &LedgerDb, config: &RunConfig, dir: &Path) -> LedgerResult<()> {
    let items = discover_scripts(dir).map_err(LedgerError::Core)?;
    upgrade_with_items(db, config, items)
}

/// Apply all pending scripts from an explicitly supplied item collection.
///
/// Items are sorted ascending by id (duplicates are rejected), the ledger
/// table is bootstrapped if absent, and every item without a ledger row is
/// executed and recorded within a single transaction. The first failure
/// rolls the whole run back and names the offending script.
pub fn upgrade_with_items(
    db: &LedgerDb,
    config: &RunConfig,
    items: Vec<MigrationItem>,
) -> LedgerResult<()> {
    log::info!("migration started (project '{}')", config.project);

    let to_apply = pending(db, config, items)?;
    if to_apply.is_empty() {
        log::info!("ledger is up to date, nothing to apply");
        return Ok(());
    }

    db.transaction(|conn| {
        for item in &to_apply {
            log::info!("executing {}", item.id);
            conn.execute_batch(&item.sql)
                .map_err(|e| LedgerError::Apply {
                    id: item.id.clone(),
                    message: e.to_string(),
                })?;
            ledger::record(conn, config, &item.id)?;
        }
        Ok(())
    })?;

    log::info!("migration ended, applied {} script(s)", to_apply.len());
    Ok(())
}

/// Bootstrap the ledger and return the subset of `items` not yet applied,
/// sorted ascending by id.
pub fn pending(
    db: &LedgerDb,
    config: &RunConfig,
    items: Vec<MigrationItem>,
) -> LedgerResult<Vec<MigrationItem>> {
    let items = order_items(items).map_err(LedgerError::Core)?;
    ledger::ensure_table(db.conn(), &config.table)?;
    let applied = ledger::applied(db.conn(), config)?;

    Ok(items
        .into_iter()
        .filter(|item| !applied.contains_key(&item.id))
        .collect())
}

/// Applied and pending scripts for one project, as seen by [`status`].
#[derive(Debug)]
pub struct LedgerStatus {
    /// Applied script ids with their ledger timestamps, ascending by id.
    pub applied: BTreeMap<String, DateTime<Utc>>,

    /// Candidate script ids without a ledger row, ascending.
    pub pending: Vec<String>,
}

/// Read-only view of the ledger against a candidate set. Bootstraps the
/// ledger table so it works on a fresh database, but applies nothing.
pub fn status(
    db: &LedgerDb,
    config: &RunConfig,
    items: Vec<MigrationItem>,
) -> LedgerResult<LedgerStatus> {
    let items = order_items(items).map_err(LedgerError::Core)?;
    ledger::ensure_table(db.conn(), &config.table)?;
    let applied = ledger::applied(db.conn(), config)?;

    let pending = items
        .into_iter()
        .filter(|item| !applied.contains_key(&item.id))
        .map(|item| item.id)
        .collect();

    Ok(LedgerStatus { applied, pending })
}

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod tests;
