//! Script discovery: turn a directory of .sql files into ordered items.

use crate::error::{CoreError, CoreResult};
use crate::item::{order_items, MigrationItem};
use std::path::Path;

/// Read all `.sql` files in `dir` into migration items, ordered ascending
/// by file name.
///
/// Only regular files with a `.sql` extension are considered;
/// subdirectories and other files are ignored. A missing directory or an
/// unreadable file is an error, surfaced before any database work starts.
pub fn discover_scripts(dir: &Path) -> CoreResult<Vec<MigrationItem>> {
    if !dir.is_dir() {
        return Err(CoreError::ScriptDirNotFound {
            path: dir.display().to_string(),
        });
    }

    let mut items = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().map_or(true, |ext| ext != "sql") {
            continue;
        }

        // Non-UTF-8 filenames cannot serve as ledger identifiers.
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(CoreError::ScriptRead {
                path: path.display().to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "file name is not valid UTF-8",
                ),
            });
        };

        let sql = std::fs::read_to_string(&path).map_err(|e| CoreError::ScriptRead {
            path: path.display().to_string(),
            source: e,
        })?;

        items.push(MigrationItem::new(name, sql));
    }

    // read_dir order is platform-dependent; ordering here also catches
    // duplicate ids, which cannot happen for files in one directory but
    // keeps the invariant in one place.
    order_items(items)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
