//! [`StorageClient`] backed by the DynamoDB API.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tb_error::{Result, TbError};
use tb_traits::{StorageClient, TablePage};
use tracing::debug;

/// DynamoDB storage: `ListTables` for enumeration, `CreateBackup` for dispatch.
#[derive(Debug, Clone)]
pub struct DynamoStorage {
    client: Client,
}

impl DynamoStorage {
    /// Wrap an existing DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StorageClient for DynamoStorage {
    async fn list_tables(
        &self,
        exclusive_start: Option<&str>,
        limit: Option<i32>,
    ) -> Result<TablePage> {
        let resp = self
            .client
            .list_tables()
            .set_exclusive_start_table_name(exclusive_start.map(str::to_string))
            .set_limit(limit)
            .send()
            .await
            .map_err(|e| TbError::ListingFailed(DisplayErrorContext(&e).to_string()))?;

        Ok(TablePage::new(
            resp.table_names.unwrap_or_default(),
            resp.last_evaluated_table_name,
        ))
    }

    async fn create_backup(&self, table_name: &str, backup_name: &str) -> Result<()> {
        self.client
            .create_backup()
            .table_name(table_name)
            .backup_name(backup_name)
            .send()
            .await
            .map_err(|e| TbError::backup_failed(table_name, DisplayErrorContext(&e)))?;

        debug!(table = %table_name, backup_name = %backup_name, "CreateBackup accepted");

        Ok(())
    }
}
