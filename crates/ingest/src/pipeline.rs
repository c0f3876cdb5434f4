//! The two entry points around the splitter.
//!
//! Upload ingestion and split preview both run the exact same
//! `ragline_splitter::split` call with the same configuration type.
//! There is no second cleaning or splitting path anywhere: separate
//! paths drift, and a preview that shows chunks ingestion never stores
//! is worse than no preview.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use ragline_core::RawDocument;
use ragline_splitter::{split, SplitConfiguration, SplitError, SplitResult};

use crate::embedding::{EmbeddingBatcher, EmbeddingCache, EmbeddingError, EmbeddingModel};
use crate::store::{DocumentStore, StoreError, VectorRecord, VectorStore};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// ── Ingestion ───────────────────────────────────────────────────────────────

/// Counts reported after a successful ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub document_id: Uuid,
    pub parent_count: usize,
    pub child_count: usize,
    pub embedded_count: usize,
    pub ingested_at: chrono::DateTime<chrono::Utc>,
}

/// Upload-side pipeline: split, persist, embed, index.
///
/// Collaborators are injected at construction; the pipeline holds them
/// behind `Arc<dyn …>` and owns no other state.
pub struct IngestPipeline {
    embedding: Arc<dyn EmbeddingModel>,
    documents: Arc<dyn DocumentStore>,
    vectors: Arc<dyn VectorStore>,
    batch_size: usize,
    cache: tokio::sync::Mutex<EmbeddingCache>,
}

impl IngestPipeline {
    pub fn new(
        embedding: Arc<dyn EmbeddingModel>,
        documents: Arc<dyn DocumentStore>,
        vectors: Arc<dyn VectorStore>,
        batch_size: usize,
        cache_capacity: usize,
    ) -> Self {
        Self {
            embedding,
            documents,
            vectors,
            batch_size: batch_size.max(1),
            cache: tokio::sync::Mutex::new(EmbeddingCache::new(cache_capacity)),
        }
    }

    /// Ingest one document: split fully in memory, then persist parents
    /// and children in order, then embed child contents batch-wise into
    /// the vector store. Store and embedding failures propagate
    /// untouched.
    pub async fn ingest(
        &self,
        document: &RawDocument,
        config: &SplitConfiguration,
    ) -> Result<IngestReport, PipelineError> {
        let result = split(document, config)?;

        for parent in &result.parents {
            self.documents.store_segment(parent).await?;
            self.documents
                .store_chunks(parent.index_node_id, &parent.children)
                .await?;
        }

        let embedded_count = self.embed_children(&result).await?;

        let report = IngestReport {
            document_id: document.metadata.document_id,
            parent_count: result.parents.len(),
            child_count: result.total_children(),
            embedded_count,
            ingested_at: chrono::Utc::now(),
        };
        info!(
            document_id = %report.document_id,
            parents = report.parent_count,
            children = report.child_count,
            "document ingested"
        );
        Ok(report)
    }

    async fn embed_children(&self, result: &SplitResult) -> Result<usize, PipelineError> {
        let mut by_chunk: Vec<(Uuid, Uuid, String)> = Vec::new();
        for parent in &result.parents {
            for child in &parent.children {
                by_chunk.push((child.id, parent.index_node_id, child.content.clone()));
            }
        }
        if by_chunk.is_empty() {
            return Ok(0);
        }

        // Resolve warm contents from the cache; only misses go to the
        // provider.
        let mut vectors: Vec<Option<Vec<f32>>> = vec![None; by_chunk.len()];
        let mut misses: Vec<usize> = Vec::new();
        {
            let mut cache = self.cache.lock().await;
            for (i, (_, _, content)) in by_chunk.iter().enumerate() {
                match cache.get(content) {
                    Some(vector) => vectors[i] = Some(vector),
                    None => misses.push(i),
                }
            }
        }

        let mut batcher = EmbeddingBatcher::new(self.embedding.clone(), self.batch_size);
        let mut embedded: Vec<(Uuid, Vec<f32>)> = Vec::new();
        for &i in &misses {
            if let Some(batch) = batcher.push(by_chunk[i].0, by_chunk[i].2.clone()).await? {
                embedded.extend(batch);
            }
        }
        embedded.extend(batcher.flush().await?);

        {
            let mut cache = self.cache.lock().await;
            for (chunk_id, vector) in embedded {
                if let Some(i) = by_chunk.iter().position(|(id, _, _)| *id == chunk_id) {
                    cache.put(&by_chunk[i].2, vector.clone());
                    vectors[i] = Some(vector);
                }
            }
        }

        // Records stay in chunk order regardless of which side (cache
        // or provider) produced the vector.
        let records: Vec<VectorRecord> = by_chunk
            .into_iter()
            .zip(vectors)
            .filter_map(|((chunk_id, segment_id, content), vector)| {
                vector.map(|vector| VectorRecord {
                    chunk_id,
                    segment_id,
                    content,
                    vector,
                })
            })
            .collect();

        let count = records.len();
        if !records.is_empty() {
            self.vectors.insert(&records).await?;
        }
        Ok(count)
    }
}

// ── Preview ─────────────────────────────────────────────────────────────────

/// Serialized preview of a split, shaped for the external API contract.
#[derive(Debug, Clone, Serialize)]
pub struct SplitPreview {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub segments: Vec<PreviewSegment>,
    pub total_segments: usize,
    /// Content of the first parent segment.
    #[serde(rename = "parentContent")]
    pub parent_content: String,
    /// All child contents across parents, in order.
    #[serde(rename = "childrenContent")]
    pub children_content: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewSegment {
    pub id: Uuid,
    pub content: String,
    pub length: usize,
    pub children: Vec<PreviewChild>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewChild {
    pub id: Uuid,
    pub content: String,
}

/// Preview a split without touching any store: the same split call the
/// ingestion path runs, serialized for display and thrown away.
pub fn preview_split(
    document: &RawDocument,
    config: &SplitConfiguration,
) -> Result<SplitPreview, SplitError> {
    let result = split(document, config)?;
    Ok(preview_from_result(&result))
}

fn preview_from_result(result: &SplitResult) -> SplitPreview {
    if result.is_empty() {
        return SplitPreview {
            success: false,
            message: Some("document produced no segments".to_string()),
            segments: Vec::new(),
            total_segments: 0,
            parent_content: String::new(),
            children_content: Vec::new(),
        };
    }

    let segments: Vec<PreviewSegment> = result
        .parents
        .iter()
        .map(|parent| PreviewSegment {
            id: parent.index_node_id,
            content: parent.content.clone(),
            length: parent.content.chars().count(),
            children: parent
                .children
                .iter()
                .map(|child| PreviewChild {
                    id: child.id,
                    content: child.content.clone(),
                })
                .collect(),
        })
        .collect();

    let children_content: Vec<String> = result
        .parents
        .iter()
        .flat_map(|p| p.children.iter().map(|c| c.content.clone()))
        .collect();

    SplitPreview {
        success: true,
        message: None,
        total_segments: segments.len(),
        parent_content: result
            .first_parent_content()
            .unwrap_or_default()
            .to_string(),
        children_content,
        segments,
    }
}
