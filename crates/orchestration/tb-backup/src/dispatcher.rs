//! Rate-limited backup dispatch.

use std::collections::VecDeque;

use chrono::Utc;
use tb_error::Result;
use tb_traits::{StorageClient, TableName};
use tracing::{debug, info, warn};

use crate::BackupRun;
use crate::naming::backup_name;
use crate::rate::RateLimiter;
use crate::report::{BackupReport, BackupStatus};
use crate::stats::BackupStats;

/// Issues one backup request per queued table, one per rate-limiter permit.
///
/// Tables are dispatched strictly in queue order and never concurrently. A failed
/// backup call is recorded and the loop moves on; nothing is retried and a single
/// table's failure never stops the rest of the queue.
pub struct Dispatcher<'a, C: StorageClient + ?Sized, R: RateLimiter> {
    client: &'a C,
    limiter: R,
}

impl<'a, C: StorageClient + ?Sized, R: RateLimiter> Dispatcher<'a, C, R> {
    /// Create a new Dispatcher.
    ///
    /// # Arguments
    ///
    /// * `client` - The storage client used for backup calls
    /// * `limiter` - The gate awaited before each backup call
    pub fn new(client: &'a C, limiter: R) -> Self {
        Self { client, limiter }
    }

    /// Drain `queue`, backing up each table.
    ///
    /// Returns once the queue is empty; an empty queue returns immediately
    /// without waiting for a permit.
    pub async fn dispatch(mut self, mut queue: VecDeque<TableName>) -> BackupRun {
        let mut report = BackupReport::new();
        let mut stats = BackupStats::new();
        stats.tables_enumerated = queue.len();

        info!(tables = queue.len(), "Starting backup dispatch");

        while !queue.is_empty() {
            self.limiter.acquire().await;

            let Some(table) = queue.pop_front() else {
                break;
            };

            let status = match self.backup_table(&table).await {
                Ok(()) => {
                    stats.record_success();
                    debug!(table = %table, "Backup created");
                    BackupStatus::Succeeded
                }
                Err(e) => {
                    warn!(table = %table, error = %e, "Backup failed");
                    stats.record_failure(&e);
                    BackupStatus::Failed
                }
            };

            report.record(table, status);
        }

        stats.complete();

        info!(
            succeeded = stats.tables_succeeded,
            failed = stats.tables_failed,
            "Backup dispatch completed"
        );

        BackupRun { report, stats }
    }

    async fn backup_table(&self, table: &str) -> Result<()> {
        let name = backup_name(table, Utc::now());
        info!(table = %table, backup_name = %name, "Backing up table");
        self.client.create_backup(table, &name).await
    }
}
