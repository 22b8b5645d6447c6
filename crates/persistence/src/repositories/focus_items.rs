//! Focus item repository for the "Our Focus" CMS collection.

use domain::models::landing::{CreateFocusItemRequest, FocusItem, UpdateFocusItemRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for focus item database operations.
#[derive(Clone)]
pub struct FocusItemRepository {
    pool: PgPool,
}

impl FocusItemRepository {
    /// Creates a new FocusItemRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active focus items, ordering ascending.
    pub async fn list(&self) -> Result<Vec<FocusItem>, sqlx::Error> {
        let timer = QueryTimer::new("list_focus_items");
        let result = sqlx::query_as::<_, FocusItem>(
            "SELECT * FROM focus_items WHERE is_active = true ORDER BY ordering ASC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active focus item by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<FocusItem>, sqlx::Error> {
        let timer = QueryTimer::new("find_focus_item_by_id");
        let result = sqlx::query_as::<_, FocusItem>(
            "SELECT * FROM focus_items WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a focus item.
    pub async fn create(
        &self,
        request: &CreateFocusItemRequest,
        created_by: Option<Uuid>,
    ) -> Result<FocusItem, sqlx::Error> {
        let timer = QueryTimer::new("create_focus_item");
        let result = sqlx::query_as::<_, FocusItem>(
            r#"
            INSERT INTO focus_items (title, icon, description, ordering, media_id, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.title)
        .bind(&request.icon)
        .bind(&request.description)
        .bind(request.ordering)
        .bind(request.media_id)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a focus item. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateFocusItemRequest,
    ) -> Result<FocusItem, sqlx::Error> {
        let timer = QueryTimer::new("update_focus_item");
        let result = sqlx::query_as::<_, FocusItem>(
            r#"
            UPDATE focus_items
            SET
                title = COALESCE($2, title),
                icon = COALESCE($3, icon),
                description = COALESCE($4, description),
                ordering = COALESCE($5, ordering),
                media_id = COALESCE($6, media_id),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.title)
        .bind(&request.icon)
        .bind(&request.description)
        .bind(request.ordering)
        .bind(request.media_id)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a focus item.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_focus_item");
        let result = sqlx::query(
            "UPDATE focus_items SET is_active = false, updated_at = NOW() WHERE id = $1",
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
    // Note: FocusItemRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
