use std::sync::Arc;

use tracing::info;

use ragline_core::Config;

use super::ollama::OllamaEmbedding;
use super::openai::OpenAiEmbedding;
use super::traits::{EmbeddingError, EmbeddingModel};

/// Build the configured embedding provider.
///
/// Provider choice happens here, once, at startup; everything
/// downstream holds the capability behind `Arc<dyn EmbeddingModel>`.
pub fn embedding_from_config(config: &Config) -> Result<Arc<dyn EmbeddingModel>, EmbeddingError> {
    match config.embedding.provider.as_str() {
        "ollama" => {
            info!(
                model = %config.ollama.embedding_model,
                url = %config.ollama.url,
                "using ollama embeddings"
            );
            Ok(Arc::new(OllamaEmbedding::new(
                config.ollama.url.clone(),
                config.ollama.embedding_model.clone(),
                config.embedding.dimensions,
            )))
        }
        "openai" => {
            let api_key = config
                .openai
                .api_key
                .clone()
                .ok_or_else(|| EmbeddingError::NotConfigured("openai: OPENAI_API_KEY".to_string()))?;
            info!(model = %config.openai.model, "using openai embeddings");
            Ok(Arc::new(OpenAiEmbedding::new(
                api_key,
                config.openai.model.clone(),
                config.openai.base_url.clone(),
                config.embedding.dimensions,
            )))
        }
        other => Err(EmbeddingError::UnknownProvider(other.to_string())),
    }
}
