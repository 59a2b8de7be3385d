//! tb-backup - rate-limited bulk table backup.
//!
//! This crate backs up every table in a storage account on demand. It provides:
//!
//! - Table enumeration with transparent pagination
//! - A fixed-interval rate limiter keeping backup requests under the account quota
//! - Sequential backup dispatch that partitions tables into completed and errored
//! - A DynamoDB adapter with LocalStack support
//!
//! # Example
//!
//! ```ignore
//! use tb_backup::{BackupConfig, BackupRunner};
//! use tb_backup::dynamodb::{DynamoConfig, DynamoStorage, create_dynamodb_client};
//!
//! let client = create_dynamodb_client(&DynamoConfig::new().with_region("us-east-1")).await?;
//! let runner = BackupRunner::new(DynamoStorage::new(client), BackupConfig::new());
//!
//! let run = runner.run().await?;
//! println!("{}", serde_json::to_string(&run.report)?);
//! ```

pub mod config;
pub mod dispatcher;
pub mod dynamodb;
pub mod list;
pub mod naming;
pub mod rate;
pub mod report;
pub mod runner;
pub mod stats;

pub use config::BackupConfig;
pub use dispatcher::Dispatcher;
pub use list::{collect_tables, list_tables};
pub use naming::backup_name;
pub use rate::{DEFAULT_INTERVAL, IntervalRateLimiter, MIN_INTERVAL, RateLimiter};
pub use report::{BackupReport, BackupStatus};
pub use runner::BackupRunner;
pub use stats::BackupStats;

/// Result of a completed run: the report for the caller plus run statistics.
#[derive(Debug, Clone)]
pub struct BackupRun {
    /// Tables partitioned by outcome, in dispatch order
    pub report: BackupReport,

    /// Counts and timing for the run
    pub stats: BackupStats,
}
