//! Partner repository for the partner logo CMS collection.

use domain::models::landing::{CreatePartnerRequest, Partner, UpdatePartnerRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for partner database operations.
#[derive(Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    /// Creates a new PartnerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active partners, ordering ascending.
    pub async fn list(&self) -> Result<Vec<Partner>, sqlx::Error> {
        let timer = QueryTimer::new("list_partners");
        let result = sqlx::query_as::<_, Partner>(
            "SELECT * FROM partners WHERE is_active = true ORDER BY ordering ASC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active partner by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Partner>, sqlx::Error> {
        let timer = QueryTimer::new("find_partner_by_id");
        let result = sqlx::query_as::<_, Partner>(
            "SELECT * FROM partners WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a partner.
    pub async fn create(
        &self,
        request: &CreatePartnerRequest,
        created_by: Option<Uuid>,
    ) -> Result<Partner, sqlx::Error> {
        let timer = QueryTimer::new("create_partner");
        let result = sqlx::query_as::<_, Partner>(
            r#"
            INSERT INTO partners (name, logo_id, website_url, description, ordering, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(request.logo_id)
        .bind(&request.website_url)
        .bind(&request.description)
        .bind(request.ordering)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a partner. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdatePartnerRequest,
    ) -> Result<Partner, sqlx::Error> {
        let timer = QueryTimer::new("update_partner");
        let result = sqlx::query_as::<_, Partner>(
            r#"
            UPDATE partners
            SET
                name = COALESCE($2, name),
                logo_id = COALESCE($3, logo_id),
                website_url = COALESCE($4, website_url),
                description = COALESCE($5, description),
                ordering = COALESCE($6, ordering),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(request.logo_id)
        .bind(&request.website_url)
        .bind(&request.description)
        .bind(request.ordering)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a partner.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_partner");
        let result = sqlx::query(
            "UPDATE partners SET is_active = false, updated_at = NOW() WHERE id = $1",
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
    // Note: PartnerRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
