//! LocalStack test context and utilities.

use anyhow::Result;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use tb_backup::dynamodb::{DynamoConfig, DynamoStorage, create_dynamodb_client};

/// LocalStack test context providing a DynamoDB client.
pub struct LocalStackTestContext {
    pub dynamodb: DynamoClient,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Create a new LocalStack test context.
    ///
    /// Uses the `LOCALSTACK_ENDPOINT` environment variable if set,
    /// otherwise defaults to `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.clone()))
            .endpoint_url(&endpoint)
            .credentials_provider(aws_sdk_dynamodb::config::Credentials::new(
                "test", "test", None, None, "localstack",
            ))
            .load()
            .await;

        Self {
            dynamodb: DynamoClient::new(&config),
            endpoint,
            region,
        }
    }

    /// Check if LocalStack is available and healthy.
    pub async fn is_available(&self) -> bool {
        self.dynamodb.list_tables().limit(1).send().await.is_ok()
    }

    /// A [`DynamoStorage`] pointed at LocalStack through the production client builder.
    pub async fn storage(&self) -> DynamoStorage {
        let config = DynamoConfig::new()
            .with_region(&self.region)
            .with_endpoint(&self.endpoint)
            .with_credentials("test", "test");

        let client = create_dynamodb_client(&config)
            .await
            .expect("client config is static");
        DynamoStorage::new(client)
    }

    /// Create an on-demand table keyed by `pk`, if it does not exist.
    pub async fn create_table(&self, name: &str) -> Result<()> {
        if self.table_exists(name).await? {
            return Ok(());
        }

        self.dynamodb
            .create_table()
            .table_name(name)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name("pk")
                    .attribute_type(ScalarAttributeType::S)
                    .build()?,
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name("pk")
                    .key_type(KeyType::Hash)
                    .build()?,
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await?;
        Ok(())
    }

    /// Delete a table, ignoring whether it exists.
    pub async fn delete_table(&self, name: &str) {
        let _ = self.dynamodb.delete_table().table_name(name).send().await;
    }

    /// Check whether `name` is listed.
    pub async fn table_exists(&self, name: &str) -> Result<bool> {
        let mut start: Option<String> = None;
        loop {
            let resp = self
                .dynamodb
                .list_tables()
                .set_exclusive_start_table_name(start.take())
                .send()
                .await?;

            if resp.table_names().iter().any(|t| t == name) {
                return Ok(true);
            }

            match resp.last_evaluated_table_name {
                Some(next) => start = Some(next),
                None => return Ok(false),
            }
        }
    }

    /// Names of backups recorded for `table`.
    pub async fn backup_names(&self, table: &str) -> Result<Vec<String>> {
        let resp = self
            .dynamodb
            .list_backups()
            .table_name(table)
            .send()
            .await?;

        Ok(resp
            .backup_summaries()
            .iter()
            .filter_map(|s| s.backup_name().map(str::to_string))
            .collect())
    }
}
