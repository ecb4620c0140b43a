//! Typed representation of the Brightspace table-of-contents document.
//!
//! The TOC endpoint returns a recursively nested JSON tree:
//! `{ Modules: [ { Title, Topics: [ { TopicId, ... } ], Modules: [...] } ] }`.
//! Unknown fields are ignored so that API additions do not break parsing.

use serde::Deserialize;

/// Root of the course table-of-contents document
#[derive(Debug, Clone, Deserialize)]
pub struct TocDocument {
    /// Top-level modules; absent when the course has no content
    #[serde(rename = "Modules", default)]
    pub modules: Vec<TocModule>,
}

/// A named grouping node in the course content hierarchy
#[derive(Debug, Clone, Deserialize)]
pub struct TocModule {
    /// Display title; the API may omit or null it
    #[serde(rename = "Title", default)]
    pub title: Option<String>,

    /// Leaf content items directly under this module
    #[serde(rename = "Topics", default)]
    pub topics: Vec<TocTopic>,

    /// Nested child modules
    #[serde(rename = "Modules", default)]
    pub modules: Vec<TocModule>,
}

/// A leaf content item; only file-backed topics carry a `TopicId`
#[derive(Debug, Clone, Deserialize)]
pub struct TocTopic {
    #[serde(rename = "TopicId", default)]
    pub topic_id: Option<u64>,
}

/// A flattened (topic identifier, module path) pair produced by tree
/// traversal.
///
/// `path` holds the sanitized module titles from the root to the containing
/// module, in order. Records appear in pre-order traversal order; duplicate
/// topic ids are preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRecord {
    pub topic_id: u64,
    pub path: Vec<String>,
}
