//! In-memory job listing store.
//!
//! A [`JobStore`] reads its CSV source once, on the first query or on an
//! explicit [`JobStore::load`], and answers every query with a linear scan
//! over the cached rows. Results are always owned copies of the cached jobs.

pub mod data;

pub use data::{Dataset, Job};

use crate::error::{JobDataError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Inline(String),
}

impl Source {
    fn name(&self) -> String {
        match self {
            Source::File(path) => path.display().to_string(),
            Source::Inline(_) => "<inline>".to_string(),
        }
    }

    fn read(&self) -> Result<Dataset> {
        match self {
            Source::File(path) => data::load_csv_file(path),
            Source::Inline(text) => data::parse_csv(text.as_bytes(), &self.name()),
        }
    }
}

#[derive(Debug)]
pub struct JobStore {
    source: Source,
    dataset: OnceLock<Result<Dataset>>,
}

impl JobStore {
    /// Creates a store backed by a CSV file. Nothing is read until the first
    /// query or [`JobStore::load`].
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_source(Source::File(path.as_ref().to_path_buf()))
    }

    /// Creates a store backed by CSV text held in memory.
    pub fn from_csv(text: impl Into<String>) -> Self {
        Self::with_source(Source::Inline(text.into()))
    }

    fn with_source(source: Source) -> Self {
        Self {
            source,
            dataset: OnceLock::new(),
        }
    }

    /// Loads the dataset if it has not been loaded yet.
    ///
    /// The source is read at most once. A failed load is remembered and the
    /// same error is returned from every later call and query.
    pub fn load(&self) -> Result<&Dataset> {
        self.dataset
            .get_or_init(|| {
                let loaded = self.source.read();
                match &loaded {
                    Ok(dataset) => tracing::info!(
                        source = %self.source.name(),
                        jobs = dataset.jobs.len(),
                        columns = dataset.header.len(),
                        "Loaded job data"
                    ),
                    Err(e) => tracing::error!(error = %e, "Failed to load job data"),
                }
                loaded
            })
            .as_ref()
            .map_err(|e| e.clone())
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.dataset.get(), Some(Ok(_)))
    }

    pub fn header(&self) -> Result<&[String]> {
        Ok(&self.load()?.header)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.jobs.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Every distinct value of `column`, sorted ascending.
    pub fn distinct_values(&self, column: &str) -> Result<Vec<String>> {
        let dataset = self.load()?;
        require_column(dataset, column)?;

        let values: BTreeSet<&str> = dataset
            .jobs
            .iter()
            .filter_map(|job| job.get(column))
            .map(String::as_str)
            .collect();

        tracing::debug!(column, count = values.len(), "Collected distinct values");
        Ok(values.into_iter().map(str::to_string).collect())
    }

    /// A copy of every job, in file order.
    pub fn all(&self) -> Result<Vec<Job>> {
        let dataset = self.load()?;
        Ok(dataset.jobs.clone())
    }

    /// Jobs whose `column` contains `term`, ignoring case.
    pub fn find_by_column_and_value(&self, column: &str, term: &str) -> Result<Vec<Job>> {
        let dataset = self.load()?;
        require_column(dataset, column)?;

        let needle = term.to_lowercase();
        let jobs: Vec<Job> = dataset
            .jobs
            .iter()
            .filter(|job| {
                job.get(column)
                    .is_some_and(|value| contains_folded(value, &needle))
            })
            .cloned()
            .collect();

        tracing::debug!(column, term, matches = jobs.len(), "Searched column");
        Ok(jobs)
    }

    /// Jobs where any column contains `term`, ignoring case.
    ///
    /// Each row is visited once, so a row matching in several columns is
    /// returned once. Identical rows at different positions are distinct
    /// listings and are all returned.
    pub fn find_by_value(&self, term: &str) -> Result<Vec<Job>> {
        let dataset = self.load()?;

        let needle = term.to_lowercase();
        let jobs: Vec<Job> = dataset
            .jobs
            .iter()
            .filter(|job| job.values().any(|value| contains_folded(value, &needle)))
            .cloned()
            .collect();

        tracing::debug!(term, matches = jobs.len(), "Searched all columns");
        Ok(jobs)
    }
}

fn require_column(dataset: &Dataset, column: &str) -> Result<()> {
    if dataset.has_column(column) {
        Ok(())
    } else {
        Err(JobDataError::MissingColumn {
            column: column.to_string(),
            available: dataset.header.clone(),
        })
    }
}

/// `needle` must already be lower-cased.
fn contains_folded(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(needle)
}
