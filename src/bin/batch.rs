//! One-shot batch merge of a directory of exports.
//!
//! Pairs every `{site}-backlinks.xlsx` with its `{site}-backlinks_refdomains.xlsx`
//! counterpart and writes one `{site}-merged.xlsx` per site.
//!
//! # Usage
//!
//! ```bash
//! # Merge everything in ./backlink_resource into ./merged_backlinks
//! cargo run --bin batch
//!
//! # Custom directories, date-stamped output names, no prompts
//! cargo run --bin batch -- -i exports -o merged --dated --yes
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` (optional): log filter, default `info`
//! - `LOG_FORMAT` (optional): `text` or `json`, default `text`

use backlink_merger::application::services::{BatchReport, BatchService, MergeService, OutputNaming};
use backlink_merger::infrastructure::spreadsheet::XlsxWorkbook;
use backlink_merger::logging;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// Merge backlinks and referring-domains exports found in a directory.
#[derive(Parser)]
#[command(name = "batch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the exported workbooks
    #[arg(short, long, default_value = "backlink_resource")]
    input_dir: PathBuf,

    /// Directory receiving the merged workbooks (created if missing)
    #[arg(short, long, default_value = "merged_backlinks")]
    output_dir: PathBuf,

    /// Append today's date to output names ({site}-merged-YYYYMMDD.xlsx)
    #[arg(long)]
    dated: bool,

    /// Overwrite existing merged files without asking
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    logging::init(&log_level, &log_format)?;

    let codec = Arc::new(XlsxWorkbook::new());
    let service = BatchService::new(Arc::new(MergeService::new(codec.clone(), codec)));

    if !cli.yes && !confirm_overwrite(&cli.output_dir)? {
        println!("{}", "Aborted.".yellow());
        return Ok(());
    }

    let naming = if cli.dated {
        OutputNaming::Dated(Local::now().date_naive())
    } else {
        OutputNaming::Plain
    };

    println!("{}", "Starting backlink merge process...".bold());
    let report = service.run(&cli.input_dir, &cli.output_dir, naming)?;
    print_report(&report);

    Ok(())
}

/// Asks before overwriting merged files left by a previous run.
fn confirm_overwrite(output_dir: &std::path::Path) -> Result<bool> {
    let existing = BatchService::<XlsxWorkbook, XlsxWorkbook>::existing_outputs(output_dir);
    if existing.is_empty() {
        return Ok(true);
    }

    println!(
        "{} {} merged file(s) already exist in {}",
        "Warning:".yellow().bold(),
        existing.len(),
        output_dir.display()
    );

    let confirmed = Confirm::new()
        .with_prompt("Overwrite files with the same name?")
        .default(false)
        .interact()?;

    Ok(confirmed)
}

fn print_report(report: &BatchReport) {
    println!();

    for merged in &report.merged {
        println!(
            "  {} {} → {} ({} records)",
            "✓".green(),
            merged.site_domain.bold(),
            merged.path.display(),
            merged.records
        );
    }

    for failed in &report.failed {
        println!(
            "  {} {}: {}",
            "✗".red(),
            failed.site_domain.bold(),
            failed.error
        );
    }

    for name in &report.unpaired {
        println!("  {} {} (no matching export)", "!".yellow(), name);
    }

    println!();
    println!(
        "{} {} merged, {} failed, {} unpaired",
        "Merge process completed:".bold(),
        report.merged.len().to_string().green(),
        report.failed.len().to_string().red(),
        report.unpaired.len().to_string().yellow()
    );
}
