//! Error types for table-backup.
//!
//! This crate provides:
//! - [`TbError`] - Top-level error enum for enumeration, dispatch and configuration
//! - [`Result`] - Result alias used across the workspace
//!
//! Only [`TbError::ListingFailed`] and [`TbError::Config`] are fatal to a run.
//! [`TbError::BackupFailed`] is recovered per table by the dispatcher.

use thiserror::Error;

/// Top-level error type for table-backup.
#[derive(Error, Debug)]
pub enum TbError {
    /// A page of the table listing could not be retrieved
    #[error("Listing failed: {0}")]
    ListingFailed(String),

    /// A single table's backup-creation call failed
    #[error("Backup failed for {table}: {message}")]
    BackupFailed { table: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TbError {
    /// Build a [`TbError::BackupFailed`] for `table`.
    pub fn backup_failed(table: impl Into<String>, message: impl ToString) -> Self {
        Self::BackupFailed {
            table: table.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using TbError.
pub type Result<T> = std::result::Result<T, TbError>;
