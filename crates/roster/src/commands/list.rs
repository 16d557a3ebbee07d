use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use roster_core::json::read_records;
use roster_core::sample::sample_contacts;
use roster_core::{Record, RecordFormatter, RosterConfig};

use super::select_formatter;
use crate::output;

#[derive(Args)]
pub struct ListArgs {
    /// JSON file holding an array of records (default: the sample roster)
    #[arg(long)]
    file: Option<PathBuf>,
    /// Separator placed between values
    #[arg(long)]
    separator: Option<String>,
    /// Prefix each row with its number
    #[arg(long)]
    numbered: bool,
}

pub fn run(args: ListArgs, config: &RosterConfig) -> anyhow::Result<()> {
    let records: Vec<Record> = match &args.file {
        Some(path) => read_records(path)
            .with_context(|| format!("loading records from {}", path.display()))?,
        None => sample_contacts(),
    };

    let formatter = select_formatter(args.separator, config);
    let numbered = args.numbered || config.numbered;

    tracing::debug!("listing {} records", records.len());
    if records.is_empty() {
        tracing::info!("no records to list");
    }
    for row in render_rows(&records, &formatter, numbered) {
        println!("{row}");
    }
    Ok(())
}

/// One display row per record, optionally prefixed with its number.
pub fn render_rows(records: &[Record], formatter: &RecordFormatter, numbered: bool) -> Vec<String> {
    let rows = formatter.format_all(records);
    if !numbered {
        return rows;
    }
    let width = output::number_width(rows.len());
    rows.iter()
        .enumerate()
        .map(|(i, row)| output::numbered(i, width, row))
        .collect()
}
