//! # d2l-archiver
//!
//! Downloads every file attachment from a Brightspace (D2L) course and packs
//! them into a single zip archive that mirrors the course's module hierarchy.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (TOC tree, topic records, download report)
//! - [`portal`]: Authenticated HTTP client for the Brightspace portal
//! - [`crawl`]: TOC enumeration and tree flattening
//! - [`download`]: Sequential file materialization into a staging directory
//! - [`archive`]: Zip packaging of the staged files
//! - [`config`]: Configuration management

pub mod archive;
pub mod config;
pub mod crawl;
pub mod download;
pub mod models;
pub mod portal;
pub mod utils;

// Re-export commonly used types
pub use models::{DownloadReport, MaterializedFile, TopicRecord};
pub use portal::{PortalClient, PortalError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
