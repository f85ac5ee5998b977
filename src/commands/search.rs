use anyhow::{Context, Result};
use std::io::Write;

use super::{emit_jobs, OutputOptions};
use crate::store::JobStore;

/// Column name that selects a search across every column, unless the data
/// itself has a column by that name.
pub const ALL_COLUMNS: &str = "all";

pub fn handle_search<W: Write>(
    store: &JobStore,
    term: &str,
    column: Option<&str>,
    options: OutputOptions,
    out: &mut W,
) -> Result<()> {
    let column = match column {
        Some(ALL_COLUMNS) => {
            let header = store.header().context("Failed to read columns")?;
            header
                .iter()
                .any(|name| name == ALL_COLUMNS)
                .then_some(ALL_COLUMNS)
        }
        other => other,
    };

    let jobs = match column {
        Some(column) => store
            .find_by_column_and_value(column, term)
            .with_context(|| format!("Failed to search '{}' for '{}'", column, term))?,
        None => store
            .find_by_value(term)
            .with_context(|| format!("Failed to search for '{}'", term))?,
    };

    emit_jobs(out, &jobs, options)
}
