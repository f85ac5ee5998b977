//! Query a CSV dataset of job listings.
//!
//! ```no_run
//! use techjobs::store::JobStore;
//!
//! let store = JobStore::open("resources/job_data.csv");
//! for employer in store.distinct_values("employer")? {
//!     println!("{}", employer);
//! }
//! # Ok::<(), techjobs::error::JobDataError>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod store;
pub mod ui;
