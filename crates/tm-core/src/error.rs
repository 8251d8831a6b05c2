//! Error types for tm-core

use thiserror::Error;

/// Core error type for Tidemark
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Configuration file not found
    #[error("[C001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// C002: Failed to parse configuration file
    #[error("[C002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// C003: Invalid configuration value
    #[error("[C003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// C004: Ledger table name is not a safe SQL identifier
    ///
    /// The table name is interpolated into DDL and cannot be bound as a
    /// query parameter, so it is restricted to `[A-Za-z_][A-Za-z0-9_]*`.
    #[error("[C004] Invalid ledger table name '{name}': must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidTableName { name: String },

    /// C005: Two migration items in one run share an identifier
    #[error("[C005] Duplicate migration script id: {id}")]
    DuplicateScript { id: String },

    /// C006: Scripts directory missing or unreadable
    #[error("[C006] Scripts directory not found: {path}")]
    ScriptDirNotFound { path: String },

    /// C007: A script file could not be read
    #[error("[C007] Failed to read script '{path}': {source}")]
    ScriptRead {
        path: String,
        source: std::io::Error,
    },

    /// IO error without more specific context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
