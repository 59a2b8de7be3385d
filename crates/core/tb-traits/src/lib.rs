//! Core traits for table-backup.
//!
//! This crate defines the seam between the backup engine and the storage service:
//! - [`StorageClient`] - Trait for the table listing and backup-creation capability
//! - [`TablePage`] - One page of a table listing
//! - [`InMemoryStorage`] - In-memory client for tests and local development

pub mod memory;
pub mod storage;

pub use memory::{BackupCall, InMemoryStorage};
pub use storage::*;
