//! Per-download outcomes collected into a run report.
//!
//! Each download attempt produces one [`DownloadOutcome`] instead of relying
//! on caught errors for control flow; the caller inspects the report to
//! decide whether anything is worth archiving.

use std::path::PathBuf;

use crate::portal::PortalError;

/// A file successfully written into the staging directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedFile {
    /// Absolute path inside the staging directory
    pub path: PathBuf,

    /// Archive-relative path: module path segments plus the resolved filename
    pub rel_path: PathBuf,
}

/// Result of a single topic download attempt
#[derive(Debug)]
pub enum DownloadOutcome {
    Downloaded(MaterializedFile),
    Skipped { topic_id: u64, reason: PortalError },
}

/// All outcomes of one materialization pass, in record order
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl DownloadReport {
    /// Successfully materialized files, in download order
    pub fn downloaded(&self) -> impl Iterator<Item = &MaterializedFile> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            DownloadOutcome::Downloaded(file) => Some(file),
            DownloadOutcome::Skipped { .. } => None,
        })
    }

    /// Consume the report, keeping only the materialized files
    pub fn into_downloaded(self) -> Vec<MaterializedFile> {
        self.outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                DownloadOutcome::Downloaded(file) => Some(file),
                DownloadOutcome::Skipped { .. } => None,
            })
            .collect()
    }

    pub fn downloaded_count(&self) -> usize {
        self.downloaded().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.downloaded_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts() {
        let report = DownloadReport {
            outcomes: vec![
                DownloadOutcome::Downloaded(MaterializedFile {
                    path: PathBuf::from("/tmp/stage/Week 1/notes.pdf"),
                    rel_path: PathBuf::from("Week 1/notes.pdf"),
                }),
                DownloadOutcome::Skipped {
                    topic_id: 42,
                    reason: PortalError::Network("timed out".to_string()),
                },
            ],
        };

        assert_eq!(report.downloaded_count(), 1);
        assert_eq!(report.skipped_count(), 1);

        let files = report.into_downloaded();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].rel_path, PathBuf::from("Week 1/notes.pdf"));
    }
}
