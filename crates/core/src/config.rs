use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub postgres: PostgresConfig,
    pub embedding: EmbeddingConfig,
    pub ollama: OllamaConfig,
    pub openai: OpenAiConfig,
    pub split: SplitDefaults,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            postgres: PostgresConfig::from_env(),
            embedding: EmbeddingConfig::from_env(),
            ollama: OllamaConfig::from_env(),
            openai: OpenAiConfig::from_env(),
            split: SplitDefaults::from_env(),
        }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  postgres:  host={}, db={}", self.postgres.host, self.postgres.database);
        tracing::info!("  embedding: provider={}, dims={}", self.embedding.provider, self.embedding.dimensions);
        tracing::info!("  ollama:    url={}, model={}", self.ollama.url, self.ollama.embedding_model);
        tracing::info!(
            "  openai:    model={}, key={}",
            self.openai.model,
            if self.openai.api_key.is_some() { "set" } else { "(none)" }
        );
        tracing::info!(
            "  split:     parent={}±{}, child={}±{}",
            self.split.parent_chunk_size,
            self.split.parent_chunk_overlap,
            self.split.child_chunk_size,
            self.split.child_chunk_overlap
        );
    }
}

// ── PostgreSQL ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub ssl_mode: String,
    pub max_connections: u32,
}

impl PostgresConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("PG_HOST", "localhost"),
            port: env_opt("PG_PORT").and_then(|v| v.parse().ok()).unwrap_or(5432),
            database: env_or("PG_DATABASE", "ragline"),
            username: env_opt("PG_USERNAME"),
            password: env_opt("PG_PASSWORD"),
            ssl_mode: env_or("PG_SSL_MODE", "prefer"),
            max_connections: env_u32("PG_MAX_CONNECTIONS", 10),
        }
    }

    pub fn connection_string(&self) -> String {
        let user = self.username.as_deref().unwrap_or("postgres");
        let pass = self.password.as_deref().unwrap_or("");
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            user, pass, self.host, self.port, self.database, self.ssl_mode
        )
    }

    pub fn is_configured(&self) -> bool {
        self.username.is_some()
    }
}

// ── Embedding ─────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// "ollama" or "openai"
    pub provider: String,
    pub dimensions: usize,
    pub batch_size: usize,
    pub cache_capacity: usize,
}

impl EmbeddingConfig {
    fn from_env() -> Self {
        Self {
            provider: env_or("EMBEDDING_PROVIDER", "ollama"),
            dimensions: env_usize("EMBEDDING_DIMENSIONS", 768),
            batch_size: env_usize("EMBEDDING_BATCH_SIZE", 64),
            cache_capacity: env_usize("EMBEDDING_CACHE_CAPACITY", 4096),
        }
    }
}

// ── Ollama (local models) ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub url: String,
    pub embedding_model: String,
}

impl OllamaConfig {
    fn from_env() -> Self {
        Self {
            url: env_or("OLLAMA_URL", "http://localhost:11434"),
            embedding_model: env_or("OLLAMA_EMBEDDING_MODEL", "nomic-embed-text"),
        }
    }
}

// ── OpenAI ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: Option<String>,
}

impl OpenAiConfig {
    fn from_env() -> Self {
        Self {
            api_key: env_opt("OPENAI_API_KEY"),
            model: env_or("OPENAI_EMBEDDING_MODEL", "text-embedding-3-small"),
            base_url: env_opt("OPENAI_BASE_URL"),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

// ── Split defaults ────────────────────────────────────────────

/// Default splitting parameters applied when an upload/preview request
/// does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitDefaults {
    pub parent_chunk_size: usize,
    pub parent_chunk_overlap: usize,
    pub parent_separator: String,
    pub child_chunk_size: usize,
    pub child_chunk_overlap: usize,
    pub child_separator: String,
}

impl SplitDefaults {
    fn from_env() -> Self {
        Self {
            parent_chunk_size: env_usize("PARENT_CHUNK_SIZE", 1024),
            parent_chunk_overlap: env_usize("PARENT_CHUNK_OVERLAP", 200),
            parent_separator: env_or("PARENT_SEPARATOR", "\n\n"),
            child_chunk_size: env_usize("CHILD_CHUNK_SIZE", 512),
            child_chunk_overlap: env_usize("CHILD_CHUNK_OVERLAP", 50),
            child_separator: env_or("CHILD_SEPARATOR", "\n"),
        }
    }
}

impl Default for SplitDefaults {
    fn default() -> Self {
        Self {
            parent_chunk_size: 1024,
            parent_chunk_overlap: 200,
            parent_separator: "\n\n".to_string(),
            child_chunk_size: 512,
            child_chunk_overlap: 50,
            child_separator: "\n".to_string(),
        }
    }
}
