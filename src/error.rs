use thiserror::Error;

/// Errors surfaced by the job store.
///
/// The type is `Clone` so a failed load can be recorded once and handed back
/// to every query that runs after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobDataError {
    #[error("Failed to load job data from {source_name}: {reason}")]
    LoadFailed { source_name: String, reason: String },

    #[error("Unknown column '{column}' (available: {})", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

impl JobDataError {
    pub fn load_failed(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::LoadFailed {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, JobDataError>;
