use std::sync::Arc;

use uuid::Uuid;

use super::traits::{EmbeddingError, EmbeddingModel};

/// Collects (chunk id, text) pairs and embeds them a full batch at a
/// time, keeping provider round-trips bounded during ingestion.
pub struct EmbeddingBatcher {
    buffer: Vec<(Uuid, String)>,
    batch_size: usize,
    model: Arc<dyn EmbeddingModel>,
}

impl EmbeddingBatcher {
    pub fn new(model: Arc<dyn EmbeddingModel>, batch_size: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(batch_size.max(1)),
            batch_size: batch_size.max(1),
            model,
        }
    }

    /// Queue a chunk. Returns the embedded batch when the buffer fills.
    pub async fn push(
        &mut self,
        chunk_id: Uuid,
        text: String,
    ) -> Result<Option<Vec<(Uuid, Vec<f32>)>>, EmbeddingError> {
        self.buffer.push((chunk_id, text));
        if self.buffer.len() >= self.batch_size {
            Ok(Some(self.flush().await?))
        } else {
            Ok(None)
        }
    }

    /// Embed and drain whatever is buffered.
    pub async fn flush(&mut self) -> Result<Vec<(Uuid, Vec<f32>)>, EmbeddingError> {
        if self.buffer.is_empty() {
            return Ok(Vec::new());
        }
        let pending: Vec<(Uuid, String)> = self.buffer.drain(..).collect();
        let texts: Vec<&str> = pending.iter().map(|(_, t)| t.as_str()).collect();
        let vectors = self.model.embed_documents(&texts).await?;

        Ok(pending
            .into_iter()
            .zip(vectors)
            .map(|((id, _), vector)| (id, vector))
            .collect())
    }

    /// Number of chunks waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingModel {
        calls: AtomicUsize,
        dims: usize,
    }

    impl CountingModel {
        fn new(dims: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                dims,
            }
        }
    }

    #[async_trait]
    impl EmbeddingModel for CountingModel {
        async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(texts.iter().map(|_| vec![0.0; self.dims]).collect())
        }

        async fn embed_query(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
            Ok(vec![0.0; self.dims])
        }

        fn dimensions(&self) -> usize {
            self.dims
        }
    }

    #[tokio::test]
    async fn auto_flush_at_batch_size() {
        let model = Arc::new(CountingModel::new(4));
        let mut batcher = EmbeddingBatcher::new(model.clone(), 2);

        assert!(batcher.push(Uuid::new_v4(), "a".into()).await.unwrap().is_none());
        let flushed = batcher.push(Uuid::new_v4(), "b".into()).await.unwrap();
        assert_eq!(flushed.unwrap().len(), 2);
        assert_eq!(batcher.pending(), 0);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn manual_flush_drains_remainder() {
        let model = Arc::new(CountingModel::new(4));
        let mut batcher = EmbeddingBatcher::new(model, 100);

        batcher.push(Uuid::new_v4(), "a".into()).await.unwrap();
        batcher.push(Uuid::new_v4(), "b".into()).await.unwrap();
        batcher.push(Uuid::new_v4(), "c".into()).await.unwrap();

        let flushed = batcher.flush().await.unwrap();
        assert_eq!(flushed.len(), 3);
        assert_eq!(batcher.pending(), 0);
    }

    #[tokio::test]
    async fn flush_when_empty_skips_the_provider() {
        let model = Arc::new(CountingModel::new(4));
        let mut batcher = EmbeddingBatcher::new(model.clone(), 8);

        assert!(batcher.flush().await.unwrap().is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ids_stay_paired_with_their_vectors() {
        let model = Arc::new(CountingModel::new(2));
        let mut batcher = EmbeddingBatcher::new(model, 10);

        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        batcher.push(first, "one".into()).await.unwrap();
        batcher.push(second, "two".into()).await.unwrap();

        let flushed = batcher.flush().await.unwrap();
        assert_eq!(flushed[0].0, first);
        assert_eq!(flushed[1].0, second);
    }
}
