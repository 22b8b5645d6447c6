//! Landing section and section block repository.
//!
//! Sections and their child blocks are ordered collections with soft delete:
//! display pages may already link to them, so deletion only flips visibility.

use domain::models::landing::{
    CreateBlockRequest, CreateSectionRequest, LandingSection, SectionBlock, UpdateBlockRequest,
    UpdateSectionRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for landing sections and their blocks.
#[derive(Clone)]
pub struct SectionRepository {
    pool: PgPool,
}

impl SectionRepository {
    /// Creates a new SectionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active sections, ordering ascending.
    pub async fn list(&self) -> Result<Vec<LandingSection>, sqlx::Error> {
        let timer = QueryTimer::new("list_landing_sections");
        let result = sqlx::query_as::<_, LandingSection>(
            "SELECT * FROM landing_sections WHERE is_active = true ORDER BY ordering ASC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active section by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LandingSection>, sqlx::Error> {
        let timer = QueryTimer::new("find_landing_section_by_id");
        let result = sqlx::query_as::<_, LandingSection>(
            "SELECT * FROM landing_sections WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a section.
    pub async fn create(
        &self,
        request: &CreateSectionRequest,
        updated_by: Option<Uuid>,
    ) -> Result<LandingSection, sqlx::Error> {
        let timer = QueryTimer::new("create_landing_section");
        let result = sqlx::query_as::<_, LandingSection>(
            r#"
            INSERT INTO landing_sections (slug, title, section_type, ordering, background_color,
                background_media_id, custom_css, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.slug)
        .bind(&request.title)
        .bind(&request.section_type)
        .bind(request.ordering)
        .bind(&request.background_color)
        .bind(request.background_media_id)
        .bind(&request.custom_css)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a section. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateSectionRequest,
        updated_by: Option<Uuid>,
    ) -> Result<LandingSection, sqlx::Error> {
        let timer = QueryTimer::new("update_landing_section");
        let result = sqlx::query_as::<_, LandingSection>(
            r#"
            UPDATE landing_sections
            SET
                slug = COALESCE($2, slug),
                title = COALESCE($3, title),
                section_type = COALESCE($4, section_type),
                ordering = COALESCE($5, ordering),
                background_color = COALESCE($6, background_color),
                background_media_id = COALESCE($7, background_media_id),
                custom_css = COALESCE($8, custom_css),
                is_active = COALESCE($9, is_active),
                updated_by = COALESCE($10, updated_by),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.slug)
        .bind(&request.title)
        .bind(&request.section_type)
        .bind(request.ordering)
        .bind(&request.background_color)
        .bind(request.background_media_id)
        .bind(&request.custom_css)
        .bind(request.is_active)
        .bind(updated_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a section.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_landing_section");
        let result = sqlx::query(
            "UPDATE landing_sections SET is_active = false, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// List a section's active blocks, ordering ascending.
    pub async fn list_blocks(&self, section_id: i32) -> Result<Vec<SectionBlock>, sqlx::Error> {
        let timer = QueryTimer::new("list_section_blocks");
        let result = sqlx::query_as::<_, SectionBlock>(
            r#"
            SELECT * FROM section_blocks
            WHERE section_id = $1 AND is_active = true
            ORDER BY ordering ASC
            "#,
        )
        .bind(section_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a block inside a section.
    pub async fn create_block(
        &self,
        request: &CreateBlockRequest,
    ) -> Result<SectionBlock, sqlx::Error> {
        let timer = QueryTimer::new("create_section_block");
        let result = sqlx::query_as::<_, SectionBlock>(
            r#"
            INSERT INTO section_blocks (section_id, block_type, ordering, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.section_id)
        .bind(&request.block_type)
        .bind(request.ordering)
        .bind(&request.content)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a block. `RowNotFound` when absent.
    pub async fn update_block(
        &self,
        id: i32,
        request: &UpdateBlockRequest,
    ) -> Result<SectionBlock, sqlx::Error> {
        let timer = QueryTimer::new("update_section_block");
        let result = sqlx::query_as::<_, SectionBlock>(
            r#"
            UPDATE section_blocks
            SET
                block_type = COALESCE($2, block_type),
                ordering = COALESCE($3, ordering),
                content = COALESCE($4, content),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.block_type)
        .bind(request.ordering)
        .bind(&request.content)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a block.
    pub async fn delete_block(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_section_block");
        let result = sqlx::query(
            "UPDATE section_blocks SET is_active = false, updated_at = NOW() WHERE id = $1",
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
    // Note: SectionRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
