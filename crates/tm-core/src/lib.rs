//! tm-core - Core library for Tidemark
//!
//! This crate provides the shared types used across Tidemark components:
//! project configuration parsing, the `MigrationItem` unit of work, script
//! discovery from a directory, and the core error type.

pub mod config;
pub mod error;
pub mod item;
pub mod source;
pub mod table_name;

pub use config::{Config, DatabaseConfig, RunConfig, DEFAULT_LEDGER_TABLE, DEFAULT_SCRIPTS_DIR};
pub use error::{CoreError, CoreResult};
pub use item::{order_items, MigrationItem};
pub use source::discover_scripts;
pub use table_name::TableName;
