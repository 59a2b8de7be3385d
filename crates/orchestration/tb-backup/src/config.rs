//! Configuration types for a backup run.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tb_error::{Result, TbError};

use crate::rate::{DEFAULT_INTERVAL, MIN_INTERVAL};

/// Largest page the DynamoDB `ListTables` API accepts.
pub const MAX_PAGE_SIZE: i32 = 100;

/// Configuration for a backup run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Minimum spacing between consecutive backup requests
    pub interval: Duration,

    /// Page size forwarded to the listing call (`None` = service default)
    pub page_size: Option<i32>,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            page_size: None,
        }
    }
}

impl BackupConfig {
    /// Create a new backup configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing between backup requests.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the listing page size.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Check the configuration against the service quota and API limits.
    pub fn validate(&self) -> Result<()> {
        if self.interval < MIN_INTERVAL {
            return Err(TbError::Config(format!(
                "interval {}ms is below the {}ms minimum (50 backup requests/second)",
                self.interval.as_millis(),
                MIN_INTERVAL.as_millis()
            )));
        }

        if let Some(page_size) = self.page_size {
            if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
                return Err(TbError::Config(format!(
                    "page size {page_size} is not in 1..={MAX_PAGE_SIZE}"
                )));
            }
        }

        Ok(())
    }
}
