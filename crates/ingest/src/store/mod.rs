//! Persistence contracts for split output.
//!
//! The pipeline talks to stores only through these traits; the split
//! itself has always fully completed in memory before the first store
//! call, so a persistence failure can never leave a half-split
//! document behind.

mod memory;
mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use ragline_splitter::{ChildChunk, ParentSegment};

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Segment not found: {0}")]
    SegmentNotFound(Uuid),

    #[error("{0}")]
    Other(String),
}

/// Durable home of parent segments and their child chunks.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist one parent segment (its metadata and content).
    async fn store_segment(&self, segment: &ParentSegment) -> Result<(), StoreError>;

    /// Persist the child chunks of a previously stored segment.
    async fn store_chunks(&self, segment_id: Uuid, chunks: &[ChildChunk]) -> Result<(), StoreError>;
}

/// A chunk embedding ready for similarity lookup.
#[derive(Debug, Clone)]
pub struct VectorRecord {
    pub chunk_id: Uuid,
    pub segment_id: Uuid,
    pub content: String,
    pub vector: Vec<f32>,
}

/// Sink for chunk embeddings.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn insert(&self, records: &[VectorRecord]) -> Result<(), StoreError>;
}
