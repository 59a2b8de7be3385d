//! DynamoDB backup integration tests using LocalStack.
//!
//! These tests verify that enumeration pages through a real `ListTables`
//! and that a full run gives every table exactly one outcome.

use crate::common::LocalStackTestContext;
use tb_backup::{BackupConfig, BackupRunner, collect_tables};
use tb_error::TbError;
use tb_traits::StorageClient;

const TABLES: [&str; 3] = ["tb-it-alpha", "tb-it-bravo", "tb-it-charlie"];

async fn setup(ctx: &LocalStackTestContext) {
    for table in TABLES {
        ctx.create_table(table).await.unwrap();
    }
}

async fn teardown(ctx: &LocalStackTestContext) {
    for table in TABLES {
        ctx.delete_table(table).await;
    }
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_enumerates_tables_one_per_page() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    setup(&ctx).await;

    let storage = ctx.storage().await;
    let tables = collect_tables(&storage, Some(1)).await.unwrap();

    for table in TABLES {
        assert_eq!(
            tables.iter().filter(|t| t.as_str() == table).count(),
            1,
            "{table} should be listed exactly once"
        );
    }

    teardown(&ctx).await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_run_gives_every_table_one_outcome() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    setup(&ctx).await;

    let runner = BackupRunner::new(
        ctx.storage().await,
        BackupConfig::new().with_page_size(2),
    );
    let run = runner.run().await.unwrap();

    assert_eq!(run.report.total(), run.stats.tables_enumerated);
    for table in TABLES {
        let completed = run.report.completed_tables.iter().any(|t| t == table);
        let errored = run.report.errored_tables.iter().any(|t| t == table);
        assert!(completed ^ errored, "{table} must have exactly one outcome");

        if completed {
            let names = ctx.backup_names(table).await.unwrap();
            assert!(names.iter().any(|n| n.ends_with(&format!("_{table}"))));
        }
    }

    teardown(&ctx).await;
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_backup_of_missing_table_fails() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let storage = ctx.storage().await;
    let err = storage
        .create_backup("tb-it-does-not-exist", "2024-01-01_00-00-00_tb-it-does-not-exist")
        .await
        .unwrap_err();

    assert!(matches!(err, TbError::BackupFailed { .. }));
}
