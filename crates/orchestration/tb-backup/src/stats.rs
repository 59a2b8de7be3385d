//! Statistics for backup runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected during a backup run.
///
/// Kept beside the [`BackupReport`](crate::BackupReport) for the human summary;
/// never part of the report itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackupStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Number of tables returned by enumeration
    pub tables_enumerated: usize,

    /// Number of backups created
    pub tables_succeeded: usize,

    /// Number of backup calls that failed
    pub tables_failed: usize,

    /// Failure messages, one per failed table
    pub errors: Vec<String>,
}

impl BackupStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record a successful backup.
    pub fn record_success(&mut self) {
        self.tables_succeeded += 1;
    }

    /// Record a failed backup.
    pub fn record_failure(&mut self, error: impl ToString) {
        self.tables_failed += 1;
        self.errors.push(error.to_string());
    }

    /// Number of tables dispatched so far.
    pub fn tables_dispatched(&self) -> usize {
        self.tables_succeeded + self.tables_failed
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Check if any backups failed.
    pub fn has_errors(&self) -> bool {
        self.tables_failed > 0
    }

    /// Calculate the throughput in dispatched tables per second.
    pub fn tables_per_second(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                self.tables_dispatched() as f64 / secs
            } else {
                0.0
            }
        })
    }
}
