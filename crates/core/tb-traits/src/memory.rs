//! In-memory storage client.
//!
//! Serves a fixed list of table names with a configurable page cap and records
//! every backup call, so the enumerator and dispatcher can be exercised without AWS.

use std::collections::HashSet;

use async_trait::async_trait;
use tb_error::{Result, TbError};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::storage::{StorageClient, TableName, TablePage};

/// A backup-creation call observed by [`InMemoryStorage`].
#[derive(Debug, Clone)]
pub struct BackupCall {
    /// Table the backup was requested for
    pub table_name: TableName,

    /// Name given to the backup
    pub backup_name: String,

    /// When the call was issued (tokio clock, so paused-time tests see virtual time)
    pub at: Instant,
}

/// In-memory [`StorageClient`].
pub struct InMemoryStorage {
    tables: Vec<TableName>,
    page_cap: usize,
    failing_tables: HashSet<TableName>,
    fail_listing_on_page: Option<usize>,
    list_calls: Mutex<Vec<Option<TableName>>>,
    backup_calls: Mutex<Vec<BackupCall>>,
}

impl InMemoryStorage {
    /// Create a storage holding `tables`, listed with a page cap of 100.
    pub fn new<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TableName>,
    {
        Self {
            tables: tables.into_iter().map(Into::into).collect(),
            page_cap: 100,
            failing_tables: HashSet::new(),
            fail_listing_on_page: None,
            list_calls: Mutex::new(Vec::new()),
            backup_calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the maximum number of names returned per listing page (minimum 1).
    pub fn with_page_cap(mut self, page_cap: usize) -> Self {
        self.page_cap = page_cap.max(1);
        self
    }

    /// Make every backup call for `table` fail.
    pub fn with_failing_table(mut self, table: impl Into<TableName>) -> Self {
        self.failing_tables.insert(table.into());
        self
    }

    /// Make the listing call for page `page` (0-based) fail.
    pub fn with_listing_failure_on_page(mut self, page: usize) -> Self {
        self.fail_listing_on_page = Some(page);
        self
    }

    /// Cursors passed to each listing call, in call order.
    pub async fn list_calls(&self) -> Vec<Option<TableName>> {
        self.list_calls.lock().await.clone()
    }

    /// Backup calls issued so far, in call order.
    pub async fn backup_calls(&self) -> Vec<BackupCall> {
        self.backup_calls.lock().await.clone()
    }
}

#[async_trait]
impl StorageClient for InMemoryStorage {
    async fn list_tables(
        &self,
        exclusive_start: Option<&str>,
        limit: Option<i32>,
    ) -> Result<TablePage> {
        let page_index = {
            let mut calls = self.list_calls.lock().await;
            calls.push(exclusive_start.map(str::to_string));
            calls.len() - 1
        };

        if self.fail_listing_on_page == Some(page_index) {
            return Err(TbError::ListingFailed(format!(
                "simulated failure on page {page_index}"
            )));
        }

        let start = match exclusive_start {
            None => 0,
            Some(name) => {
                let position = self
                    .tables
                    .iter()
                    .position(|t| t == name)
                    .ok_or_else(|| TbError::ListingFailed(format!("unknown start table: {name}")))?;
                position + 1
            }
        };

        let cap = match limit {
            Some(limit) if limit > 0 => (limit as usize).min(self.page_cap),
            _ => self.page_cap,
        };
        let end = (start + cap).min(self.tables.len());
        let table_names = self.tables[start..end].to_vec();

        let last_evaluated_table_name = if end < self.tables.len() {
            table_names.last().cloned()
        } else {
            None
        };

        Ok(TablePage::new(table_names, last_evaluated_table_name))
    }

    async fn create_backup(&self, table_name: &str, backup_name: &str) -> Result<()> {
        self.backup_calls.lock().await.push(BackupCall {
            table_name: table_name.to_string(),
            backup_name: backup_name.to_string(),
            at: Instant::now(),
        });

        if self.failing_tables.contains(table_name) {
            return Err(TbError::backup_failed(
                table_name,
                "simulated backup failure",
            ));
        }

        Ok(())
    }
}
