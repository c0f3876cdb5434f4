//! Embedding-model capability with swappable providers.
//!
//! Providers are selected at configuration time and injected as
//! `Arc<dyn EmbeddingModel>`; nothing looks them up through ambient
//! global state.

pub mod batcher;
pub mod cache;
mod factory;
pub mod ollama;
pub mod openai;
mod traits;

pub use batcher::EmbeddingBatcher;
pub use cache::EmbeddingCache;
pub use factory::embedding_from_config;
pub use ollama::OllamaEmbedding;
pub use openai::OpenAiEmbedding;
pub use traits::{EmbeddingError, EmbeddingModel};
