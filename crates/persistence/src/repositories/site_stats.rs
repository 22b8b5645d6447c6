//! Site stat repository for the metrics strip CMS collection.

use domain::models::landing::{CreateStatRequest, SiteStat, UpdateStatRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for site stat database operations.
#[derive(Clone)]
pub struct SiteStatRepository {
    pool: PgPool,
}

impl SiteStatRepository {
    /// Creates a new SiteStatRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active stats, ordering ascending.
    pub async fn list(&self) -> Result<Vec<SiteStat>, sqlx::Error> {
        let timer = QueryTimer::new("list_site_stats");
        let result = sqlx::query_as::<_, SiteStat>(
            "SELECT * FROM site_stats WHERE is_active = true ORDER BY ordering ASC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active stat by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<SiteStat>, sqlx::Error> {
        let timer = QueryTimer::new("find_site_stat_by_id");
        let result = sqlx::query_as::<_, SiteStat>(
            "SELECT * FROM site_stats WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a stat.
    pub async fn create(
        &self,
        request: &CreateStatRequest,
        updated_by: Option<Uuid>,
    ) -> Result<SiteStat, sqlx::Error> {
        let timer = QueryTimer::new("create_site_stat");
        let result = sqlx::query_as::<_, SiteStat>(
            r#"
            INSERT INTO site_stats (label, value, icon, suffix, ordering, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.label)
        .bind(&request.value)
        .bind(&request.icon)
        .bind(&request.suffix)
        .bind(request.ordering)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a stat. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateStatRequest,
        updated_by: Option<Uuid>,
    ) -> Result<SiteStat, sqlx::Error> {
        let timer = QueryTimer::new("update_site_stat");
        let result = sqlx::query_as::<_, SiteStat>(
            r#"
            UPDATE site_stats
            SET
                label = COALESCE($2, label),
                value = COALESCE($3, value),
                icon = COALESCE($4, icon),
                suffix = COALESCE($5, suffix),
                ordering = COALESCE($6, ordering),
                is_active = COALESCE($7, is_active),
                updated_by = COALESCE($8, updated_by),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.label)
        .bind(&request.value)
        .bind(&request.icon)
        .bind(&request.suffix)
        .bind(request.ordering)
        .bind(request.is_active)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a stat.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_site_stat");
        let result = sqlx::query(
            "UPDATE site_stats SET is_active = false, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: SiteStatRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
