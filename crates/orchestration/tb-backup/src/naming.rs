//! Backup name generation.

use chrono::{DateTime, Utc};

/// Timestamp layout prefixed to every backup name.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Build the backup name for `table` captured at `at`: `YYYY-MM-DD_HH-MM-SS_<table>`.
pub fn backup_name(table: &str, at: DateTime<Utc>) -> String {
    format!("{}_{}", at.format(BACKUP_TIMESTAMP_FORMAT), table)
}
