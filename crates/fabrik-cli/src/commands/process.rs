//! Process command - extract and match every line item of an invoice.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use fabrik_core::{analyze, summarize, CatalogIndex, CatalogSource, ClassifiedLine, MatchSummary};

use crate::catalog::CsvCatalog;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Invoice text file (OCR output)
    #[arg(short, long)]
    invoice: PathBuf,

    /// Catalog CSV file
    #[arg(short, long)]
    catalog: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Full report for one processed invoice.
#[derive(Serialize)]
struct ProcessReport {
    lines: Vec<ClassifiedLine>,
    summary: MatchSummary,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !args.invoice.exists() {
        anyhow::bail!("Invoice file not found: {}", args.invoice.display());
    }

    let text = fs::read_to_string(&args.invoice)?;
    let entries = CsvCatalog::new(&args.catalog).load()?;
    info!(entries = entries.len(), "catalog loaded");

    let index = CatalogIndex::build(entries);
    let lines = analyze(&text, &index);
    let summary = summarize(&lines);

    let report = ProcessReport { lines, summary };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            eprintln!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if report.summary.unmatched > 0 {
        eprintln!(
            "{} of {} lines had no catalog match",
            report.summary.unmatched, report.summary.total
        );
    }

    Ok(())
}
