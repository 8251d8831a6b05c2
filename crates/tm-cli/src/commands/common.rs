//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tm_core::{Config, RunConfig};
use tm_ledger::LedgerDb;

use crate::cli::GlobalArgs;

/// Default config file name inside a project directory.
pub(crate) const CONFIG_FILE: &str = "tidemark.yml";

/// Resolve the config file path from global args.
pub(crate) fn config_path(global: &GlobalArgs) -> PathBuf {
    match &global.config {
        Some(path) => PathBuf::from(path),
        None => Path::new(&global.project_dir).join(CONFIG_FILE),
    }
}

/// Load and validate the project configuration.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let path = config_path(global);
    if global.verbose {
        eprintln!("[verbose] Loading config from: {}", path.display());
    }
    Config::load(&path).with_context(|| format!("failed to load {}", path.display()))
}

/// Build the reconciler run configuration from the loaded config.
pub(crate) fn run_config(config: &Config) -> Result<RunConfig> {
    Ok(config.run_config()?)
}

/// Open the database named in the config, resolving relative paths against
/// the project directory.
pub(crate) fn open_db(config: &Config, global: &GlobalArgs) -> Result<LedgerDb> {
    let raw = &config.database.path;
    if raw == ":memory:" {
        return Ok(LedgerDb::open_str(raw)?);
    }

    let path = resolve(global, raw);
    if global.verbose {
        eprintln!("[verbose] Opening database: {}", path.display());
    }
    Ok(LedgerDb::open(&path)?)
}

/// Scripts directory from the config, resolved against the project dir.
pub(crate) fn scripts_dir(config: &Config, global: &GlobalArgs) -> PathBuf {
    resolve(global, &config.scripts_dir)
}

fn resolve(global: &GlobalArgs, raw: &str) -> PathBuf {
    let path = Path::new(raw);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(&global.project_dir).join(path)
    }
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
