//! Lookup command - match one product name against the catalog.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use fabrik_core::{
    CatalogIndex, CatalogSource, MatchEngine, MatchResult, RecordingObserver, SourceLayout,
    StrategyAttempt,
};

use crate::catalog::CsvCatalog;

/// Arguments for the lookup command.
#[derive(Args)]
pub struct LookupArgs {
    /// Product name to look up
    #[arg(short, long)]
    name: String,

    /// Catalog CSV file
    #[arg(short, long)]
    catalog: PathBuf,

    /// Show every strategy attempt, not just the final result
    #[arg(long)]
    trace: bool,
}

#[derive(Serialize)]
struct LookupReport {
    result: MatchResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attempts: Vec<StrategyAttempt>,
}

pub fn run(args: LookupArgs) -> anyhow::Result<()> {
    let entries = CsvCatalog::new(&args.catalog).load()?;
    let index = CatalogIndex::build(entries);
    let engine = MatchEngine::new(&index);

    let mut observer = RecordingObserver::default();
    let parsed = fabrik_core::ParsedLine::new(&args.name, None, None, None, SourceLayout::Generic);
    let result = engine.match_line_observed(parsed, &mut observer);

    let attempts = if args.trace {
        observer.attempts
    } else {
        Vec::new()
    };

    let report = LookupReport { result, attempts };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
