//! The backup report handed back to the caller.

use serde::{Deserialize, Serialize};
use tb_traits::TableName;

/// Outcome of a single table's backup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    /// The backup-creation call succeeded
    Succeeded,
    /// The backup-creation call failed
    Failed,
}

/// Final partition of tables into backed-up and errored.
///
/// Both lists keep dispatch order. Serializes to exactly
/// `{"completed_tables": [...], "errored_tables": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupReport {
    /// Tables whose backup was created
    pub completed_tables: Vec<TableName>,

    /// Tables whose backup call failed
    pub errored_tables: Vec<TableName>,
}

impl BackupReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `table` to the list matching `status`.
    pub fn record(&mut self, table: TableName, status: BackupStatus) {
        match status {
            BackupStatus::Succeeded => self.completed_tables.push(table),
            BackupStatus::Failed => self.errored_tables.push(table),
        }
    }

    /// Number of tables with a recorded outcome.
    pub fn total(&self) -> usize {
        self.completed_tables.len() + self.errored_tables.len()
    }

    /// Check if any table failed.
    pub fn has_errors(&self) -> bool {
        !self.errored_tables.is_empty()
    }
}
