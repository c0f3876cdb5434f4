use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::traits::{EmbeddingError, EmbeddingModel};

/// Embedding backend talking to a local Ollama instance.
pub struct OllamaEmbedding {
    client: Client,
    url: String,
    model: String,
    dimensions: usize,
}

impl OllamaEmbedding {
    pub fn new(url: String, model: String, dimensions: usize) -> Self {
        Self {
            client: Client::new(),
            url,
            model,
            dimensions,
        }
    }

    async fn embed(&self, input: Vec<String>) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let request = EmbedRequest {
            model: self.model.clone(),
            input,
        };

        let response = self
            .client
            .post(format!("{}/api/embed", self.url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api(format!("{status}: {body}")));
        }

        let parsed: EmbedResponse = response.json().await?;

        if let Some(first) = parsed.embeddings.first() {
            if first.len() != self.dimensions {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: first.len(),
                });
            }
        }

        Ok(parsed.embeddings)
    }
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    input: Vec<String>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[async_trait]
impl EmbeddingModel for OllamaEmbedding {
    async fn embed_documents(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.embed(texts.iter().map(|t| t.to_string()).collect())
            .await
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.embed(vec![text.to_string()]).await?;
        vectors
            .pop()
            .ok_or_else(|| EmbeddingError::Api("empty embedding response".to_string()))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
