//! Utility modules supporting the crawl and download pipeline.
//!
//! - [`sanitize_segment`]: make a module title safe for use as a path segment
//! - [`filename_from_disposition`]: best-effort filename derivation from a
//!   `content-disposition` header
//! - [`UNKNOWN_FILE`]: placeholder used when no filename can be derived

mod disposition;
mod sanitize;

pub use disposition::{filename_from_disposition, UNKNOWN_FILE};
pub use sanitize::sanitize_segment;
