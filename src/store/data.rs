use crate::error::{JobDataError, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One job listing: column name to cell value, kept in header order.
pub type Job = IndexMap<String, String>;

/// The parsed contents of a job data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub header: Vec<String>,
    pub jobs: Vec<Job>,
}

impl Dataset {
    pub fn has_column(&self, column: &str) -> bool {
        self.header.iter().any(|name| name == column)
    }
}

pub fn load_csv_file(path: &Path) -> Result<Dataset> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| JobDataError::load_failed(&source_name, e))?;
    parse_csv(file, &source_name)
}

/// Parses RFC 4180 CSV whose first record is the header.
///
/// Records with a different field count than the header are rejected, as are
/// inputs without a header or with a repeated column name.
pub fn parse_csv<R: Read>(input: R, source_name: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let header: Vec<String> = reader
        .headers()
        .map_err(|e| JobDataError::load_failed(source_name, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if header.is_empty() {
        return Err(JobDataError::load_failed(source_name, "missing header row"));
    }

    let mut seen = HashSet::new();
    for name in &header {
        if !seen.insert(name.as_str()) {
            return Err(JobDataError::load_failed(
                source_name,
                format!("duplicate column '{}' in header", name),
            ));
        }
    }

    let mut jobs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| JobDataError::load_failed(source_name, e))?;
        let job: Job = header
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        jobs.push(job);
    }

    Ok(Dataset { header, jobs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_file_order_and_header_keys() {
        let csv = "name,employer\nData Analyst,Acme\nDeveloper,Globex\n";
        let dataset = parse_csv(csv.as_bytes(), "inline").unwrap();

        assert_eq!(dataset.header, vec!["name", "employer"]);
        assert_eq!(dataset.jobs.len(), 2);
        assert_eq!(dataset.jobs[0]["name"], "Data Analyst");
        assert_eq!(dataset.jobs[1]["employer"], "Globex");
        for job in &dataset.jobs {
            let keys: Vec<&String> = job.keys().collect();
            assert_eq!(keys, vec!["name", "employer"]);
        }
    }

    #[test]
    fn test_parse_quoted_fields() {
        let csv = "name,location\n\"Engineer, Senior\",\"St. Louis\"\n\"Says \"\"hi\"\"\",Remote\n";
        let dataset = parse_csv(csv.as_bytes(), "inline").unwrap();

        assert_eq!(dataset.jobs[0]["name"], "Engineer, Senior");
        assert_eq!(dataset.jobs[1]["name"], "Says \"hi\"");
    }

    #[test]
    fn test_byte_order_mark_is_not_part_of_first_column() {
        let csv = "\u{feff}employer,skill\nAcme,Java\n";
        let dataset = parse_csv(csv.as_bytes(), "inline").unwrap();

        assert_eq!(dataset.header, vec!["employer", "skill"]);
        assert_eq!(dataset.jobs[0]["employer"], "Acme");
    }

    #[test]
    fn test_header_only_yields_empty_dataset() {
        let dataset = parse_csv("name,employer\n".as_bytes(), "inline").unwrap();
        assert_eq!(dataset.header.len(), 2);
        assert!(dataset.jobs.is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = parse_csv("".as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, JobDataError::LoadFailed { .. }));
        assert!(err.to_string().contains("missing header row"));
    }

    #[test]
    fn test_ragged_record_is_rejected() {
        let csv = "name,employer\nDeveloper,Acme,extra\n";
        let err = parse_csv(csv.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, JobDataError::LoadFailed { .. }));
    }

    #[test]
    fn test_duplicate_header_is_rejected() {
        let err = parse_csv("name,name\na,b\n".as_bytes(), "inline").unwrap_err();
        assert!(err.to_string().contains("duplicate column 'name'"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_csv_file(Path::new("/nonexistent/job_data.csv")).unwrap_err();
        match err {
            JobDataError::LoadFailed { source_name, .. } => {
                assert_eq!(source_name, "/nonexistent/job_data.csv")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
