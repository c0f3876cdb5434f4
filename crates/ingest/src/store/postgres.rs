use async_trait::async_trait;
use pgvector::Vector;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use ragline_core::config::PostgresConfig;
use ragline_splitter::{ChildChunk, ParentSegment};

use super::{DocumentStore, StoreError, VectorRecord, VectorStore};

/// PostgreSQL/pgvector-backed store.
///
/// Expects the `parent_segments`, `child_chunks`, and `chunk_vectors`
/// tables to exist; schema provisioning lives with the deployment, not
/// here.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &PostgresConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.connection_string())
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgStore {
    async fn store_segment(&self, segment: &ParentSegment) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO parent_segments \
             (id, document_id, position, content, char_start, char_end, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, now())",
        )
        .bind(segment.index_node_id)
        .bind(segment.document_id)
        .bind(segment.position as i32)
        .bind(&segment.content)
        .bind(segment.char_start as i64)
        .bind(segment.char_end as i64)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn store_chunks(&self, segment_id: Uuid, chunks: &[ChildChunk]) -> Result<(), StoreError> {
        for chunk in chunks {
            sqlx::query(
                "INSERT INTO child_chunks \
                 (id, segment_id, position, content, char_start, char_end) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(chunk.id)
            .bind(segment_id)
            .bind(chunk.position as i32)
            .bind(&chunk.content)
            .bind(chunk.char_start as i64)
            .bind(chunk.char_end as i64)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl VectorStore for PgStore {
    async fn insert(&self, records: &[VectorRecord]) -> Result<(), StoreError> {
        for record in records {
            let vector = Vector::from(record.vector.clone());
            sqlx::query(
                "INSERT INTO chunk_vectors (chunk_id, segment_id, content, embedding) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(record.chunk_id)
            .bind(record.segment_id)
            .bind(&record.content)
            .bind(&vector)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}
