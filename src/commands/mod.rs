pub mod list;
pub mod search;

use crate::store::Job;
use crate::ui::listing;
use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How command results are written.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub color: bool,
}

pub(crate) fn emit_jobs<W: Write>(out: &mut W, jobs: &[Job], options: OutputOptions) -> Result<()> {
    match options.format {
        OutputFormat::Text => listing::write_jobs(out, jobs, options.color)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, jobs)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
