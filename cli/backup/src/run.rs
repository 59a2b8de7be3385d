//! Main execution logic for tb-backup CLI.

use anyhow::{Context, Result};
use tb_backup::dynamodb::{DynamoConfig, DynamoStorage, create_dynamodb_client};
use tb_backup::{BackupConfig, BackupReport, BackupRun, BackupRunner};
use tracing::info;

use crate::args::Cli;

/// Every table was backed up (including an account with no tables).
pub const EXIT_SUCCESS: i32 = 0;

/// At least one table's backup failed; the report is still printed.
pub const EXIT_PARTIAL_FAILURE: i32 = 4;

/// Execute one backup run with the provided arguments.
pub async fn execute(args: &Cli) -> Result<BackupRun> {
    let dynamo_config = build_dynamo_config(args);
    info!(
        region = %args.region,
        endpoint = ?args.endpoint,
        interval_ms = args.interval_ms,
        "Starting table backup"
    );
    let client = create_dynamodb_client(&dynamo_config).await?;

    let mut config = BackupConfig::new().with_interval(args.interval());
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }

    let runner = BackupRunner::new(DynamoStorage::new(client), config);
    let run = runner.run().await.context("Unable to back up tables")?;

    Ok(run)
}

/// Build the DynamoDB configuration from CLI arguments.
fn build_dynamo_config(args: &Cli) -> DynamoConfig {
    let mut config = DynamoConfig::new()
        .with_region(&args.region)
        .with_timeout(args.timeout_secs);

    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        config = config.with_credentials(access_key, secret_key);
    }

    if let Some(profile) = &args.profile {
        config = config.with_profile(profile);
    }

    config
}

/// Serialize the report for stdout.
pub fn render_report(report: &BackupReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}

/// Process exit code for a finished run.
pub fn exit_code(report: &BackupReport) -> i32 {
    if report.has_errors() {
        EXIT_PARTIAL_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_dynamo_config() {
        let cli = Cli::try_parse_from([
            "tb-backup",
            "--region",
            "eu-central-1",
            "--endpoint",
            "http://localhost:4566",
            "--access-key",
            "test",
            "--secret-key",
            "secret",
            "--timeout-secs",
            "5",
        ])
        .unwrap();

        let config = build_dynamo_config(&cli);

        assert_eq!(config.region.as_deref(), Some("eu-central-1"));
        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.access_key.as_deref(), Some("test"));
        assert_eq!(config.secret_key.as_deref(), Some("secret"));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_exit_code_all_succeeded() {
        let report = BackupReport {
            completed_tables: vec!["orders".to_string(), "users".to_string()],
            errored_tables: vec![],
        };
        assert_eq!(exit_code(&report), EXIT_SUCCESS);
    }

    #[test]
    fn test_exit_code_empty_report() {
        assert_eq!(exit_code(&BackupReport::new()), 0);
    }

    #[test]
    fn test_exit_code_partial_failure() {
        let report = BackupReport {
            completed_tables: vec!["orders".to_string()],
            errored_tables: vec!["users".to_string()],
        };
        assert_eq!(exit_code(&report), 4);

        let all_failed = BackupReport {
            completed_tables: vec![],
            errored_tables: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(exit_code(&all_failed), EXIT_PARTIAL_FAILURE);
    }

    #[test]
    fn test_render_report_compact() {
        let report = BackupReport {
            completed_tables: vec!["orders".to_string()],
            errored_tables: vec!["users".to_string()],
        };

        assert_eq!(
            render_report(&report, false).unwrap(),
            r#"{"completed_tables":["orders"],"errored_tables":["users"]}"#
        );
    }

    #[test]
    fn test_render_report_pretty_round_trips() {
        let report = BackupReport {
            completed_tables: vec!["a".to_string(), "b".to_string()],
            errored_tables: vec![],
        };

        let rendered = render_report(&report, true).unwrap();
        assert!(rendered.contains('\n'));
        assert_eq!(serde_json::from_str::<BackupReport>(&rendered).unwrap(), report);
    }
}
