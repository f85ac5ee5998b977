use crate::store::Job;
use owo_colors::OwoColorize;
use std::io::{self, Write};

const SEPARATOR: &str = "*****";

/// Prints each job as a `*****` delimited block of `column: value` lines.
pub fn write_jobs<W: Write>(out: &mut W, jobs: &[Job], color: bool) -> io::Result<()> {
    if jobs.is_empty() {
        return write_no_results(out, color);
    }

    for job in jobs {
        writeln!(out, "{}", SEPARATOR)?;
        for (column, value) in job {
            if color {
                writeln!(out, "{}: {}", column.cyan(), value)?;
            } else {
                writeln!(out, "{}: {}", column, value)?;
            }
        }
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out)?;
    }

    Ok(())
}

pub fn write_values<W: Write>(
    out: &mut W,
    heading: &str,
    values: &[String],
    color: bool,
) -> io::Result<()> {
    let title = format!("*** All {} Values ***", heading);
    if color {
        writeln!(out, "{}", title.bold())?;
    } else {
        writeln!(out, "{}", title)?;
    }

    if values.is_empty() {
        return write_no_results(out, color);
    }

    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

fn write_no_results<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}", "No Results".yellow())
    } else {
        writeln!(out, "No Results")
    }
}
