//! Split configuration, output types, and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use ragline_core::DocumentId;

#[derive(Debug, Error)]
pub enum SplitError {
    /// Rejected before any splitting work begins.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reserved for undecodable input; extraction normally catches this
    /// before text reaches the splitter.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

// ── Configuration ───────────────────────────────────────────────────────────

fn default_parent_separator() -> String {
    "\n\n".to_string()
}

fn default_parent_chunk_size() -> usize {
    1024
}

fn default_parent_chunk_overlap() -> usize {
    200
}

fn default_child_separator() -> String {
    "\n".to_string()
}

fn default_child_chunk_size() -> usize {
    512
}

fn default_child_chunk_overlap() -> usize {
    50
}

/// Splitting parameters for both hierarchy levels.
///
/// Every field has a serde default so a request body can supply any
/// subset; `validate` runs before any splitting work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfiguration {
    #[serde(default = "default_parent_separator")]
    pub parent_separator: String,
    #[serde(default = "default_parent_chunk_size")]
    pub parent_chunk_size: usize,
    #[serde(default = "default_parent_chunk_overlap")]
    pub parent_chunk_overlap: usize,
    #[serde(default = "default_child_separator")]
    pub child_separator: String,
    #[serde(default = "default_child_chunk_size")]
    pub child_chunk_size: usize,
    #[serde(default = "default_child_chunk_overlap")]
    pub child_chunk_overlap: usize,
}

impl Default for SplitConfiguration {
    fn default() -> Self {
        Self {
            parent_separator: default_parent_separator(),
            parent_chunk_size: default_parent_chunk_size(),
            parent_chunk_overlap: default_parent_chunk_overlap(),
            child_separator: default_child_separator(),
            child_chunk_size: default_child_chunk_size(),
            child_chunk_overlap: default_child_chunk_overlap(),
        }
    }
}

impl SplitConfiguration {
    /// Reject empty separators, zero sizes, and overlap >= size at
    /// either level. Never partially applied: callers validate before
    /// touching any text.
    pub fn validate(&self) -> Result<(), SplitError> {
        if self.parent_separator.is_empty() {
            return Err(SplitError::InvalidConfiguration(
                "parent_separator must not be empty".to_string(),
            ));
        }
        if self.child_separator.is_empty() {
            return Err(SplitError::InvalidConfiguration(
                "child_separator must not be empty".to_string(),
            ));
        }
        if self.parent_chunk_size == 0 {
            return Err(SplitError::InvalidConfiguration(
                "parent_chunk_size must be > 0".to_string(),
            ));
        }
        if self.child_chunk_size == 0 {
            return Err(SplitError::InvalidConfiguration(
                "child_chunk_size must be > 0".to_string(),
            ));
        }
        if self.parent_chunk_overlap >= self.parent_chunk_size {
            return Err(SplitError::InvalidConfiguration(format!(
                "parent_chunk_overlap ({}) must be < parent_chunk_size ({})",
                self.parent_chunk_overlap, self.parent_chunk_size
            )));
        }
        if self.child_chunk_overlap >= self.child_chunk_size {
            return Err(SplitError::InvalidConfiguration(format!(
                "child_chunk_overlap ({}) must be < child_chunk_size ({})",
                self.child_chunk_overlap, self.child_chunk_size
            )));
        }
        Ok(())
    }
}

impl From<&ragline_core::config::SplitDefaults> for SplitConfiguration {
    fn from(d: &ragline_core::config::SplitDefaults) -> Self {
        Self {
            parent_separator: d.parent_separator.clone(),
            parent_chunk_size: d.parent_chunk_size,
            parent_chunk_overlap: d.parent_chunk_overlap,
            child_separator: d.child_separator.clone(),
            child_chunk_size: d.child_chunk_size,
            child_chunk_overlap: d.child_chunk_overlap,
        }
    }
}

// ── Spans ───────────────────────────────────────────────────────────────────

/// A contiguous run of text with its character offsets in the string it
/// was cut from. `content` is always the exact slice `[char_start,
/// char_end)` of that string, trimmed extents included in the offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub char_start: usize,
    pub char_end: usize,
}

// ── Split output ────────────────────────────────────────────────────────────

/// A top-level chunk of a document, sized for a large retrieval/display
/// window. Owns its children until persistence takes them over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentSegment {
    pub index_node_id: Uuid,
    pub content: String,
    /// 0-based order among the document's parent segments.
    pub position: usize,
    /// Character offsets into the normalized document text.
    pub char_start: usize,
    pub char_end: usize,
    pub document_id: DocumentId,
    pub children: Vec<ChildChunk>,
}

/// A sub-unit of a parent segment, sized for precise vector matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildChunk {
    pub id: Uuid,
    pub segment_id: Uuid,
    pub content: String,
    /// 0-based order within the parent.
    pub position: usize,
    /// Character offsets relative to the parent's content.
    pub char_start: usize,
    pub char_end: usize,
}

/// The full split of one document, consumed identically by ingestion
/// and preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    pub parents: Vec<ParentSegment>,
}

impl SplitResult {
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn total_children(&self) -> usize {
        self.parents.iter().map(|p| p.children.len()).sum()
    }

    /// Content of the first parent segment, if any.
    pub fn first_parent_content(&self) -> Option<&str> {
        self.parents.first().map(|p| p.content.as_str())
    }
}
