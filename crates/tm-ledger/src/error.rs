//! Error types for the ledger database layer.

use thiserror::Error;
use tm_core::CoreError;

/// Ledger database errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open or create the database (L001).
    #[error("[L001] Database connection failed: {0}")]
    Connection(String),

    /// Ledger table could not be created (L002).
    #[error("[L002] Ledger bootstrap failed: {0}")]
    Bootstrap(String),

    /// Reading applied scripts failed for a reason other than table
    /// absence (L003).
    #[error("[L003] Ledger read failed: {0}")]
    Read(String),

    /// A script's SQL failed to execute; the run's transaction is rolled
    /// back (L004).
    #[error("[L004] Script '{id}' failed: {message}")]
    Apply { id: String, message: String },

    /// The post-execution ledger insert failed, e.g. a primary-key clash
    /// from a concurrent run; same rollback as Apply (L005).
    #[error("[L005] Recording script '{id}' failed: {message}")]
    Record { id: String, message: String },

    /// Transaction management error (L006).
    #[error("[L006] Transaction failed: {0}")]
    Transaction(String),

    /// Error from configuration or script sources (L007).
    #[error("[L007] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for [`LedgerError`].
pub type LedgerResult<T> = Result<T, LedgerError>;
