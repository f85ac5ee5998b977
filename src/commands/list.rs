use anyhow::{Context, Result};
use std::io::Write;

use super::{emit_jobs, OutputFormat, OutputOptions};
use crate::store::JobStore;
use crate::ui::listing;

pub fn handle_list<W: Write>(
    store: &JobStore,
    column: &str,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    let values = store
        .distinct_values(column)
        .with_context(|| format!("Failed to list values of '{}'", column))?;

    match options.format {
        OutputFormat::Text => listing::write_values(out, column, &values, options.color)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &values)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn handle_all<W: Write>(store: &JobStore, options: OutputOptions, out: &mut W) -> Result<()> {
    let jobs = store.all().context("Failed to list jobs")?;
    emit_jobs(out, &jobs, options)
}

pub fn handle_columns<W: Write>(
    store: &JobStore,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    let header = store.header().context("Failed to read columns")?;

    match options.format {
        OutputFormat::Text => {
            for column in header {
                writeln!(out, "{}", column)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, header)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
