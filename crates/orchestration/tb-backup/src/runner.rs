//! Full backup run: enumerate, then dispatch.

use chrono::Utc;
use tb_error::Result;
use tb_traits::StorageClient;
use tracing::{error, info};

use crate::BackupRun;
use crate::config::BackupConfig;
use crate::dispatcher::Dispatcher;
use crate::list::collect_tables;
use crate::rate::IntervalRateLimiter;

/// Runs one on-demand backup of every table in the account.
///
/// Enumeration completes before the first backup request is issued. If
/// enumeration fails the run returns the error and no backup is attempted.
pub struct BackupRunner<C: StorageClient> {
    client: C,
    config: BackupConfig,
}

impl<C: StorageClient> BackupRunner<C> {
    /// Create a new BackupRunner.
    pub fn new(client: C, config: BackupConfig) -> Self {
        Self { client, config }
    }

    /// The storage client this runner backs up through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Execute the run.
    ///
    /// # Returns
    ///
    /// The report and statistics, or [`TbError::ListingFailed`](tb_error::TbError::ListingFailed)
    /// if the tables could not be enumerated.
    pub async fn run(&self) -> Result<BackupRun> {
        self.config.validate()?;

        let started_at = Utc::now();

        let tables = collect_tables(&self.client, self.config.page_size)
            .await
            .inspect_err(|e| error!(error = %e, "Unable to get tables"))?;

        let limiter = IntervalRateLimiter::new(self.config.interval)?;
        info!(
            tables = tables.len(),
            interval_ms = limiter.period().as_millis() as u64,
            "Dispatching backups"
        );

        let mut run = Dispatcher::new(&self.client, limiter)
            .dispatch(tables)
            .await;
        run.stats.started_at = Some(started_at);

        Ok(run)
    }
}
