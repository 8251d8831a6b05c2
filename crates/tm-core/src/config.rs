//! Configuration types and parsing for tidemark.yml

use crate::error::{CoreError, CoreResult};
use crate::table_name::TableName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default ledger table name.
pub const DEFAULT_LEDGER_TABLE: &str = "migration_tbl";

/// Default directory containing migration scripts.
pub const DEFAULT_SCRIPTS_DIR: &str = "migrations";

/// Main project configuration from tidemark.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Ledger project id, distinguishing this project's rows when several
    /// projects share one ledger table. Defaults to empty (single-project).
    #[serde(default)]
    pub project: String,

    /// Ledger table name
    #[serde(default = "default_ledger_table")]
    pub ledger_table: String,

    /// Directory containing migration scripts, relative to the project root
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the DuckDB database file, or ":memory:"
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_ledger_table() -> String {
    DEFAULT_LEDGER_TABLE.to_string()
}

fn default_scripts_dir() -> String {
    DEFAULT_SCRIPTS_DIR.to_string()
}

fn default_db_path() -> String {
    "dev.duckdb".to_string()
}

impl Config {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field values that serde cannot check on its own.
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "project name must not be empty".to_string(),
            });
        }
        // Surfaces InvalidTableName before any SQL is attempted.
        TableName::try_new(self.ledger_table.as_str())?;
        Ok(())
    }

    /// Build the per-run reconciler configuration.
    pub fn run_config(&self) -> CoreResult<RunConfig> {
        RunConfig::new(&self.project, &self.ledger_table)
    }
}

/// Immutable configuration for one reconciliation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Ledger project id (may be empty in single-project setups)
    pub project: String,

    /// Validated ledger table name
    pub table: TableName,
}

impl RunConfig {
    /// Create a run configuration, validating the table name.
    pub fn new(project: impl Into<String>, table: impl Into<String>) -> CoreResult<Self> {
        Ok(Self {
            project: project.into(),
            table: TableName::try_new(table)?,
        })
    }

    /// Run configuration for a project using the default ledger table.
    pub fn for_project(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            table: TableName::default_ledger(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::for_project("")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
