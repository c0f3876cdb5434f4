use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier of an uploaded document.
pub type DocumentId = Uuid;

/// Raw extracted document text plus its source metadata.
///
/// Produced by the extraction layer and treated as immutable from there on:
/// the splitter reads it, never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

impl RawDocument {
    pub fn new(text: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }

    /// Build a document from bare text with a generated id and the given source label.
    pub fn from_text(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: DocumentMetadata::new(source),
        }
    }
}

/// Document metadata: a closed set of known keys plus an explicit
/// escape hatch for arbitrary extension values.
///
/// Known keys are accessed through fields/methods; anything else goes
/// through `extra` so callers never thread an untyped map around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub document_id: DocumentId,
    /// Where the text came from ("direct_input", a filename, a URL…).
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Lowercased extension: "pdf", "txt", "md".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Owning dataset/collection, when uploaded into one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// When the document entered the system.
    pub uploaded_at: DateTime<Utc>,
    /// Extension metadata not covered by the known keys.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, Value>,
}

impl DocumentMetadata {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            document_id: Uuid::new_v4(),
            source: source.into(),
            file_name: None,
            file_type: None,
            dataset_id: None,
            uploaded_at: Utc::now(),
            extra: HashMap::new(),
        }
    }

    pub fn with_file(mut self, file_name: impl Into<String>, file_type: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self.file_type = Some(file_type.into());
        self
    }

    pub fn with_dataset(mut self, dataset_id: impl Into<String>) -> Self {
        self.dataset_id = Some(dataset_id.into());
        self
    }

    /// Read an extension value by key.
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Set an extension value, replacing any previous one.
    pub fn set_extension(&mut self, key: impl Into<String>, value: Value) {
        self.extra.insert(key.into(), value);
    }
}
