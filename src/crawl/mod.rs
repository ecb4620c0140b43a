//! Topic enumeration: fetch the course TOC and flatten its module tree.

use tracing::warn;

use crate::models::{TocDocument, TocModule, TopicRecord};
use crate::portal::PortalClient;
use crate::utils::sanitize_segment;

/// Title used for modules the API delivers without one
const UNTITLED_MODULE: &str = "Untitled Module";

/// Fetch the course table-of-contents and flatten it into topic records.
///
/// A failed fetch or malformed document is logged and treated as "no topics
/// found"; enumeration never aborts the run.
pub async fn enumerate_topics(portal: &PortalClient) -> Vec<TopicRecord> {
    match portal.fetch_toc().await {
        Ok(doc) => flatten_toc(&doc),
        Err(err) => {
            warn!(
                course_id = portal.course_id(),
                error = %err,
                "failed to fetch table of contents"
            );
            Vec::new()
        }
    }
}

/// Flatten the module tree into (topic id, module path) records.
///
/// Pre-order traversal: a module's own topics are emitted before its nested
/// modules, siblings in document order. Only topics carrying a file
/// identifier produce a record; duplicate identifiers are kept as-is.
pub fn flatten_toc(doc: &TocDocument) -> Vec<TopicRecord> {
    let mut records = Vec::new();
    walk(&doc.modules, &[], &mut records);
    records
}

fn walk(modules: &[TocModule], path: &[String], records: &mut Vec<TopicRecord>) {
    for module in modules {
        let title = module.title.as_deref().unwrap_or(UNTITLED_MODULE);
        let mut current = path.to_vec();
        current.push(sanitize_segment(title));

        for topic in &module.topics {
            if let Some(topic_id) = topic.topic_id {
                records.push(TopicRecord {
                    topic_id,
                    path: current.clone(),
                });
            }
        }

        walk(&module.modules, &current, records);
    }
}
