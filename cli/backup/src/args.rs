//! CLI argument definitions for tb-backup.

use std::time::Duration;

use clap::Parser;
use tb_backup::MIN_INTERVAL;
use tb_backup::config::MAX_PAGE_SIZE;
use tb_cli_common::LogLevel;

/// On-demand backup of every DynamoDB table in an account.
///
/// Lists all tables, then requests one backup per table at a fixed pace that
/// stays under the account's backup request quota. The report is written to
/// stdout as JSON; logs and the summary go to stderr.
///
/// ## Examples
///
/// Basic usage:
///   tb-backup --region eu-west-1
///
/// Against LocalStack, pretty report:
///   tb-backup --endpoint http://localhost:4566 --pretty
///
/// Slower pacing (10 requests/second):
///   tb-backup --interval-ms 100
#[derive(Parser, Debug)]
#[command(name = "tb-backup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === AWS Configuration ===
    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom DynamoDB endpoint URL (for LocalStack)
    #[arg(long, env = "TB_DYNAMODB_ENDPOINT")]
    pub endpoint: Option<String>,

    /// AWS access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    // === Backup Options ===
    /// Milliseconds between backup requests (must be >= 20, the 50/s quota)
    #[arg(long, env = "TB_INTERVAL_MS", default_value = "40", value_parser = parse_interval_ms)]
    pub interval_ms: u64,

    /// Tables requested per listing page (1-100, service default if unset)
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<i32>,

    // === Output Options ===
    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Spacing between backup requests.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Parse the request interval (>= [`MIN_INTERVAL`]).
fn parse_interval_ms(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if Duration::from_millis(value) < MIN_INTERVAL {
        return Err(format!(
            "{} is below the {}ms minimum",
            value,
            MIN_INTERVAL.as_millis()
        ));
    }
    Ok(value)
}

/// Parse the listing page size (1..=[`MAX_PAGE_SIZE`]).
fn parse_page_size(s: &str) -> Result<i32, String> {
    let value: i32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(1..=MAX_PAGE_SIZE).contains(&value) {
        return Err(format!("{} is not in 1..={}", value, MAX_PAGE_SIZE));
    }
    Ok(value)
}
