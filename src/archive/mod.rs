//! Archiver: pack the staged files into a single zip archive in one pass.
//!
//! Unlike the per-topic download phase, a failure here propagates and ends
//! the run; there is no partial-archive recovery.

use std::fs::File;
use std::io;
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::MaterializedFile;
use crate::utils::sanitize_segment;

/// Errors raised while writing the archive
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Build the output archive filename.
///
/// `{title}_{courseId}_files.zip` with the title sanitized like any other
/// path segment; when no title could be fetched the segment is omitted.
pub fn archive_name(title: Option<&str>, course_id: u64) -> String {
    match title {
        Some(title) => {
            format!("{}_{}_files.zip", sanitize_segment(title), course_id)
        }
        None => format!("{}_files.zip", course_id),
    }
}

/// Write every materialized file into a zip at `dest`, each stored under its
/// archive-relative path.
pub fn write_archive(
    files: &[MaterializedFile],
    dest: &Path,
) -> Result<(), ArchiveError> {
    let out = File::create(dest)?;
    let mut zip = ZipWriter::new(out);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated);

    for file in files {
        zip.start_file(zip_entry_name(&file.rel_path), options)?;
        let mut src = File::open(&file.path)?;
        io::copy(&mut src, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

/// Zip entry names always use forward slashes, regardless of platform
fn zip_entry_name(rel_path: &Path) -> String {
    rel_path
        .iter()
        .map(|component| component.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
