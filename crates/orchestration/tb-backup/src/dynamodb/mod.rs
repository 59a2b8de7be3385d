//! DynamoDB client and storage adapter.
//!
//! This module provides the production [`StorageClient`](tb_traits::StorageClient):
//! - Client configuration with LocalStack support
//! - `ListTables` / `CreateBackup` mapped onto the storage trait

mod client;
mod storage;

pub use client::{DynamoConfig, create_dynamodb_client};
pub use storage::DynamoStorage;
