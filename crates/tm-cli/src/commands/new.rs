//! New command implementation - creates a timestamped migration script

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;

use crate::cli::{GlobalArgs, NewArgs};
use crate::commands::common::{load_config, scripts_dir};

/// Execute the new command
pub(crate) fn execute(args: &NewArgs, global: &GlobalArgs) -> Result<()> {
    if args.name.is_empty()
        || args
            .name
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
    {
        anyhow::bail!(
            "Invalid script name '{}': use only letters, digits, '_' and '-'",
            args.name
        );
    }

    let config = load_config(global)?;
    let dir = scripts_dir(&config, global);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // UTC timestamp prefix keeps concurrent authors in lexicographic order.
    let filename = format!("{}_{}.sql", Utc::now().format("%Y%m%d%H%M%S"), args.name);
    let path = dir.join(&filename);
    if path.exists() {
        anyhow::bail!("Script already exists: {}", path.display());
    }

    let content = format!("-- Migration: {}\n\n", args.name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created: {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "new_test.rs"]
mod tests;
