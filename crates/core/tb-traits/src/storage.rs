//! Storage client trait and listing types.

use async_trait::async_trait;
use tb_error::Result;

/// Opaque name of a table in the storage account.
pub type TableName = String;

/// Trait for storage service backends.
///
/// Implementations include:
/// - In-memory storage (for testing/development)
/// - AWS DynamoDB (production)
///
/// # Call Flow
///
/// 1. The enumerator calls [`list_tables`](StorageClient::list_tables) with no
///    start table, then again with each page's continuation cursor until none is returned
/// 2. The dispatcher calls [`create_backup`](StorageClient::create_backup) once per table
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Lists one page of table names.
    ///
    /// # Arguments
    ///
    /// * `exclusive_start` - Continuation cursor from the previous page, `None` for the first page
    /// * `limit` - Maximum number of names to return (capped by implementation)
    async fn list_tables(
        &self,
        exclusive_start: Option<&str>,
        limit: Option<i32>,
    ) -> Result<TablePage>;

    /// Creates an on-demand backup of `table_name` named `backup_name`.
    async fn create_backup(&self, table_name: &str, backup_name: &str) -> Result<()>;
}

/// One page of a table listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePage {
    /// Table names in the order the service returned them
    pub table_names: Vec<TableName>,

    /// Continuation cursor; `Some` means more tables remain
    pub last_evaluated_table_name: Option<TableName>,
}

impl TablePage {
    /// Creates a page.
    pub fn new(table_names: Vec<TableName>, last_evaluated_table_name: Option<TableName>) -> Self {
        Self {
            table_names,
            last_evaluated_table_name,
        }
    }

    /// Whether the listing continues past this page.
    pub fn has_more(&self) -> bool {
        self.last_evaluated_table_name.is_some()
    }
}
