//! Media asset repository.
//!
//! Media rows have no ordering or visibility flag; lists are newest-first and
//! deletion is hard (nothing else owns the row once its referents are gone).

use domain::models::media::{CreateMediaAssetRequest, MediaAsset};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for media asset database operations.
#[derive(Clone)]
pub struct MediaAssetRepository {
    pool: PgPool,
}

impl MediaAssetRepository {
    /// Creates a new MediaAssetRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List media assets, newest first.
    pub async fn list(&self) -> Result<Vec<MediaAsset>, sqlx::Error> {
        let timer = QueryTimer::new("list_media_assets");
        let result = sqlx::query_as::<_, MediaAsset>(
            "SELECT * FROM media_assets ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a media asset by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<MediaAsset>, sqlx::Error> {
        let timer = QueryTimer::new("find_media_asset_by_id");
        let result = sqlx::query_as::<_, MediaAsset>("SELECT * FROM media_assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create a media asset record.
    pub async fn create(
        &self,
        request: &CreateMediaAssetRequest,
        uploaded_by: Option<Uuid>,
    ) -> Result<MediaAsset, sqlx::Error> {
        let timer = QueryTimer::new("create_media_asset");
        let result = sqlx::query_as::<_, MediaAsset>(
            r#"
            INSERT INTO media_assets (file_name, file_type, file_url, thumbnail_url, alt_text,
                metadata, uploaded_by)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{}'::jsonb), $7)
            RETURNING *
            "#,
        )
        .bind(&request.file_name)
        .bind(&request.file_type)
        .bind(&request.file_url)
        .bind(&request.thumbnail_url)
        .bind(&request.alt_text)
        .bind(&request.metadata)
        .bind(uploaded_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete a media asset record.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_media_asset");
        let result = sqlx::query("DELETE FROM media_assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: MediaAssetRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
