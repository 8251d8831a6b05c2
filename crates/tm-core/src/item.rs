//! Migration items - the unit of work applied to the database.

use crate::error::{CoreError, CoreResult};

/// One candidate change: a unique identifier plus the SQL to execute.
///
/// The identifier (typically a filename) is the idempotency key: a script
/// whose id already has a ledger row is never executed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationItem {
    /// Unique id for this change within a run
    pub id: String,

    /// Raw SQL content, possibly several statements
    pub sql: String,
}

impl MigrationItem {
    /// Create a new migration item.
    pub fn new(id: impl Into<String>, sql: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sql: sql.into(),
        }
    }
}

/// Sort items ascending by id and reject duplicate ids.
///
/// Apply order is lexicographic regardless of the order items were supplied
/// in, so "000_setup" runs before "001_init".
pub fn order_items(mut items: Vec<MigrationItem>) -> CoreResult<Vec<MigrationItem>> {
    items.sort_by(|a, b| a.id.cmp(&b.id));
    for pair in items.windows(2) {
        if pair[0].id == pair[1].id {
            return Err(CoreError::DuplicateScript {
                id: pair[0].id.clone(),
            });
        }
    }
    Ok(items)
}

#[cfg(test)]
#[path = "item_test.rs"]
mod tests;
