//! Ingestion-side collaborators of the splitting core.
//!
//! Document extraction (txt/md/pdf), the embedding-model capability
//! with swappable providers, document/vector store contracts, and the
//! two entry points (upload ingestion and split preview) that share
//! the single splitting path.

pub mod document;
pub mod embedding;
pub mod pipeline;
pub mod store;

pub use document::{extract_text, ExtractionError};
pub use embedding::{embedding_from_config, EmbeddingError, EmbeddingModel};
pub use pipeline::{preview_split, IngestPipeline, IngestReport, PipelineError, SplitPreview};
pub use store::{DocumentStore, MemoryStore, StoreError, VectorStore};
