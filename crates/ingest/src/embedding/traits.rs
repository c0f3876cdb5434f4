use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Unknown embedding provider: {0}")]
    UnknownProvider(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Capability implemented by every embedding backend.
///
/// Document batches and single queries go through separate methods
/// because some providers prefix or template the two differently.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Embed a batch of document texts, one vector per input, in input order.
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Embed a single query text.
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Dimensionality of the output vectors.
    fn dimensions(&self) -> usize;
}
