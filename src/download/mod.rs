//! File materialization: sequential, collision-safe downloads into the
//! staging directory.
//!
//! Every per-topic failure is recorded as a skip and the pass continues;
//! nothing here aborts the run.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::header::CONTENT_DISPOSITION;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::models::{
    DownloadOutcome, DownloadReport, MaterializedFile, TopicRecord,
};
use crate::portal::{PortalClient, PortalError};
use crate::utils::{filename_from_disposition, UNKNOWN_FILE};

/// Download every record's file, strictly one at a time.
///
/// Returns one outcome per record, in record order.
pub async fn materialize_all(
    portal: &PortalClient,
    records: &[TopicRecord],
    staging: &Path,
) -> DownloadReport {
    let mut outcomes = Vec::with_capacity(records.len());

    for record in records {
        match materialize_one(portal, record, staging).await {
            Ok(file) => {
                info!(
                    topic_id = record.topic_id,
                    path = %file.rel_path.display(),
                    "downloaded"
                );
                outcomes.push(DownloadOutcome::Downloaded(file));
            }
            Err(reason) => {
                warn!(
                    topic_id = record.topic_id,
                    error = %reason,
                    "skipping topic"
                );
                outcomes.push(DownloadOutcome::Skipped {
                    topic_id: record.topic_id,
                    reason,
                });
            }
        }
    }

    DownloadReport { outcomes }
}

/// Download one topic's file into `staging/<module path>/<filename>`
async fn materialize_one(
    portal: &PortalClient,
    record: &TopicRecord,
    staging: &Path,
) -> Result<MaterializedFile, PortalError> {
    let response = portal.download_topic(record.topic_id).await?;

    let filename = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|value| value.to_str().ok())
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| UNKNOWN_FILE.to_string());

    let mut dir = staging.to_path_buf();
    for segment in &record.path {
        dir.push(segment);
    }
    tokio::fs::create_dir_all(&dir).await?;

    let (path, resolved_name) = resolve_collision(&dir, &filename);

    let mut file = tokio::fs::File::create(&path).await?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if chunk.is_empty() {
            continue;
        }
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    let rel_path = record.path.iter().collect::<PathBuf>().join(&resolved_name);
    Ok(MaterializedFile { path, rel_path })
}

/// Find a filename that does not exist in `dir` yet.
///
/// Existing names get `_N` appended before the extension, N counting up from
/// 1, so re-running against a pre-populated directory never overwrites.
fn resolve_collision(dir: &Path, filename: &str) -> (PathBuf, String) {
    let (stem, ext) = split_filename(filename);
    let mut name = filename.to_string();
    let mut counter = 1u32;

    while dir.join(&name).exists() {
        name = format!("{}_{}{}", stem, counter, ext);
        counter += 1;
    }

    (dir.join(&name), name)
}

/// Split a filename into stem and extension, keeping the dot with the
/// extension. Leading-dot names count as extensionless.
fn split_filename(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_split_filename() {
        assert_eq!(split_filename("notes.pdf"), ("notes", ".pdf"));
        assert_eq!(split_filename("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_filename("README"), ("README", ""));
        assert_eq!(split_filename(".bashrc"), (".bashrc", ""));
    }

    #[test]
    fn test_collision_suffixes_increase() {
        let dir = tempfile::tempdir().unwrap();

        let (first, name) = resolve_collision(dir.path(), "notes.pdf");
        assert_eq!(name, "notes.pdf");
        fs::write(&first, b"a").unwrap();

        let (second, name) = resolve_collision(dir.path(), "notes.pdf");
        assert_eq!(name, "notes_1.pdf");
        fs::write(&second, b"b").unwrap();

        let (_, name) = resolve_collision(dir.path(), "notes.pdf");
        assert_eq!(name, "notes_2.pdf");
    }

    #[test]
    fn test_collision_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README"), b"x").unwrap();

        let (_, name) = resolve_collision(dir.path(), "README");
        assert_eq!(name, "README_1");
    }

    #[test]
    fn test_prepopulated_directory_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.pdf"), b"original").unwrap();
        fs::write(dir.path().join("notes_1.pdf"), b"second").unwrap();

        let (path, name) = resolve_collision(dir.path(), "notes.pdf");
        assert_eq!(name, "notes_2.pdf");
        assert!(!path.exists());
        assert_eq!(fs::read(dir.path().join("notes.pdf")).unwrap(), b"original");
    }
}
