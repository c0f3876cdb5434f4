use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use ragline_splitter::{ChildChunk, ParentSegment};

use super::{DocumentStore, StoreError, VectorRecord, VectorStore};

/// In-memory store used by tests and preview tooling.
///
/// Keeps everything in arrival order so assertions can compare the
/// persisted sequence against a preview's sequence directly.
#[derive(Default)]
pub struct MemoryStore {
    segments: RwLock<Vec<ParentSegment>>,
    chunks: RwLock<Vec<ChildChunk>>,
    vectors: RwLock<Vec<VectorRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn segments(&self) -> Vec<ParentSegment> {
        self.segments.read().await.clone()
    }

    pub async fn chunks(&self) -> Vec<ChildChunk> {
        self.chunks.read().await.clone()
    }

    pub async fn chunks_for(&self, segment_id: Uuid) -> Vec<ChildChunk> {
        self.chunks
            .read()
            .await
            .iter()
            .filter(|c| c.segment_id == segment_id)
            .cloned()
            .collect()
    }

    pub async fn vectors(&self) -> Vec<VectorRecord> {
        self.vectors.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn store_segment(&self, segment: &ParentSegment) -> Result<(), StoreError> {
        self.segments.write().await.push(segment.clone());
        Ok(())
    }

    async fn store_chunks(&self, segment_id: Uuid, chunks: &[ChildChunk]) -> Result<(), StoreError> {
        let known = self
            .segments
            .read()
            .await
            .iter()
            .any(|s| s.index_node_id == segment_id);
        if !known {
            return Err(StoreError::SegmentNotFound(segment_id));
        }
        self.chunks.write().await.extend_from_slice(chunks);
        Ok(())
    }
}

#[async_trait]
impl VectorStore for MemoryStore {
    async fn insert(&self, records: &[VectorRecord]) -> Result<(), StoreError> {
        self.vectors.write().await.extend_from_slice(records);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragline_core::RawDocument;
    use ragline_splitter::{split, SplitConfiguration};

    #[tokio::test]
    async fn round_trips_segments_and_chunks() {
        let store = MemoryStore::new();
        let doc = RawDocument::from_text("a\nb\n\nc", "test");
        let result = split(&doc, &SplitConfiguration::default()).unwrap();

        for parent in &result.parents {
            store.store_segment(parent).await.unwrap();
            store
                .store_chunks(parent.index_node_id, &parent.children)
                .await
                .unwrap();
        }

        assert_eq!(store.segments().await.len(), 2);
        assert_eq!(store.chunks().await.len(), 3);
        let first = &result.parents[0];
        assert_eq!(
            store.chunks_for(first.index_node_id).await.len(),
            first.children.len()
        );
    }

    #[tokio::test]
    async fn chunks_for_unknown_segment_fail() {
        let store = MemoryStore::new();
        let err = store.store_chunks(Uuid::new_v4(), &[]).await.unwrap_err();
        assert!(matches!(err, StoreError::SegmentNotFound(_)));
    }

    #[tokio::test]
    async fn vector_insert_appends_in_order() {
        let store = MemoryStore::new();
        let records: Vec<VectorRecord> = (0..3)
            .map(|i| VectorRecord {
                chunk_id: Uuid::new_v4(),
                segment_id: Uuid::new_v4(),
                content: format!("chunk {i}"),
                vector: vec![i as f32],
            })
            .collect();

        store.insert(&records[..2]).await.unwrap();
        store.insert(&records[2..]).await.unwrap();

        let stored = store.vectors().await;
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[2].content, "chunk 2");
    }
}
