//! Core data structures shared across the crate.

mod report;
mod toc;

pub use report::{DownloadOutcome, DownloadReport, MaterializedFile};
pub use toc::{TocDocument, TocModule, TocTopic, TopicRecord};
