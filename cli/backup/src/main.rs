//! tb-backup CLI
//!
//! On-demand backup of every DynamoDB table in an account.

use clap::Parser;
use tb_cli_common::{format_count, format_seconds, init_logging};

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // stderr only, stdout carries the report
    init_logging(args.log_level)?;

    // A listing failure ends here with a non-zero exit and no report
    let run = run::execute(&args).await?;

    println!("{}", run::render_report(&run.report, args.pretty)?);

    let stats = &run.stats;
    eprintln!();
    eprintln!("Backup completed:");
    eprintln!("  Tables found:     {}", format_count(stats.tables_enumerated));
    eprintln!("  Backed up:        {}", format_count(stats.tables_succeeded));
    eprintln!("  Errored:          {}", format_count(stats.tables_failed));

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:         {}",
            format_seconds(duration.num_milliseconds())
        );

        if let Some(tps) = stats.tables_per_second() {
            eprintln!("  Throughput:       {:.1} tables/sec", tps);
        }
    }

    for error in &stats.errors {
        eprintln!("  Error: {}", error);
    }

    let code = run::exit_code(&run.report);
    if code != run::EXIT_SUCCESS {
        std::process::exit(code);
    }

    Ok(())
}
