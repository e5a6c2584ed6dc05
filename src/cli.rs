use std::{env, fs, path::PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use stayhub_application::prelude::*;

const SALT_ENV: &str = "IMPORT_SALT";

/// How many failure reasons the run report prints at most.
const MAX_REPORTED_FAILURES: usize = 10;

#[derive(Debug, Parser)]
#[command(name = "stayhub", version, about = "Rental-listing backend tools")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Bulk-import offers from a TSV source file
    Import {
        /// Path to the TSV source file
        file: PathBuf,
        /// Salt for hashing imported host passwords
        /// (falls back to the IMPORT_SALT environment variable)
        #[arg(long)]
        salt: Option<String>,
    },
    /// Write sample offer records in the import format
    Generate {
        /// Number of records to generate
        count: usize,
        /// Output file path
        file: PathBuf,
    },
}

pub fn run() -> anyhow::Result<()> {
    match Args::parse().command {
        Command::Import { file, salt } => {
            let salt = match salt.or_else(|| env::var(SALT_ENV).ok()) {
                Some(salt) if !salt.is_empty() => salt,
                _ => bail!("No salt given: pass --salt or set {SALT_ENV}"),
            };
            // NOTE: the in-memory store makes this a dry run that
            // validates the source file; swap in a persistent backend
            // to keep the data.
            let store = stayhub_db_mem::MemStore::new();
            let summary = run_import(&store, &file, &salt)?;
            print_summary(&summary);
        }
        Command::Generate { count, file } => {
            let tsv = generate_tsv(&mut rand::thread_rng(), count);
            fs::write(&file, tsv)
                .with_context(|| format!("Cannot write to {}", file.display()))?;
            println!("Wrote {count} records to {}", file.display());
        }
    }
    Ok(())
}

fn print_summary(summary: &ImportSummary) {
    println!(
        "Import completed: {} records attempted, {} succeeded, {} failed",
        summary.total_lines, summary.succeeded, summary.failed
    );
    for failure in summary.failures.iter().take(MAX_REPORTED_FAILURES) {
        println!("  line {}: {}", failure.line, failure.reason);
    }
    let unreported = summary.failures.len().saturating_sub(MAX_REPORTED_FAILURES);
    if unreported > 0 {
        println!("  ... and {unreported} more");
    }
}
