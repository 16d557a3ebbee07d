use anyhow::Context;
use clap::Args;
use roster_core::json::format_value;
use roster_core::{RecordFormatter, RosterConfig, RosterError};

use super::select_formatter;

#[derive(Args)]
pub struct FormatArgs {
    /// The record as a JSON object, e.g. '{"name":"Ada","city":"London"}'
    record: String,
    /// Separator placed between values
    #[arg(long)]
    separator: Option<String>,
}

pub fn run(args: FormatArgs, config: &RosterConfig) -> anyhow::Result<()> {
    let formatter = select_formatter(args.separator, config);
    let row = render_row(&args.record, &formatter)?;
    println!("{row}");
    Ok(())
}

pub fn render_row(text: &str, formatter: &RecordFormatter) -> anyhow::Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| RosterError::Json(e.to_string()))
        .context("parsing record")?;
    let row = format_value(formatter, &value).context("formatting record")?;
    Ok(row)
}
