//! Testimonial repository.
//!
//! Public lists only show approved, active entries; the admin list includes
//! everything so unapproved submissions can be moderated.

use domain::models::landing::{
    CreateTestimonialRequest, LandingTestimonial, UpdateTestimonialRequest,
};
use sqlx::PgPool;

use crate::metrics::QueryTimer;

/// Repository for testimonial database operations.
#[derive(Clone)]
pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    /// Creates a new TestimonialRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List approved, active testimonials, ordering ascending.
    pub async fn list_public(&self) -> Result<Vec<LandingTestimonial>, sqlx::Error> {
        let timer = QueryTimer::new("list_public_testimonials");
        let result = sqlx::query_as::<_, LandingTestimonial>(
            r#"
            SELECT * FROM landing_testimonials
            WHERE is_active = true AND is_approved = true
            ORDER BY ordering ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List every testimonial for moderation, newest first.
    pub async fn list_admin(&self) -> Result<Vec<LandingTestimonial>, sqlx::Error> {
        let timer = QueryTimer::new("list_admin_testimonials");
        let result = sqlx::query_as::<_, LandingTestimonial>(
            "SELECT * FROM landing_testimonials ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active testimonial by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<LandingTestimonial>, sqlx::Error> {
        let timer = QueryTimer::new("find_testimonial_by_id");
        let result = sqlx::query_as::<_, LandingTestimonial>(
            "SELECT * FROM landing_testimonials WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a testimonial.
    pub async fn create(
        &self,
        request: &CreateTestimonialRequest,
    ) -> Result<LandingTestimonial, sqlx::Error> {
        let timer = QueryTimer::new("create_testimonial");
        let result = sqlx::query_as::<_, LandingTestimonial>(
            r#"
            INSERT INTO landing_testimonials (name, role, photo_id, rating, feedback,
                is_approved, ordering, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.role)
        .bind(request.photo_id)
        .bind(request.rating)
        .bind(&request.feedback)
        .bind(request.is_approved)
        .bind(request.ordering)
        .bind(request.user_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a testimonial. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateTestimonialRequest,
    ) -> Result<LandingTestimonial, sqlx::Error> {
        let timer = QueryTimer::new("update_testimonial");
        let result = sqlx::query_as::<_, LandingTestimonial>(
            r#"
            UPDATE landing_testimonials
            SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                photo_id = COALESCE($4, photo_id),
                rating = COALESCE($5, rating),
                feedback = COALESCE($6, feedback),
                is_approved = COALESCE($7, is_approved),
                ordering = COALESCE($8, ordering),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(request.photo_id)
        .bind(request.rating)
        .bind(&request.feedback)
        .bind(request.is_approved)
        .bind(request.ordering)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a testimonial.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_testimonial");
        let result = sqlx::query(
            "UPDATE landing_testimonials SET is_active = false, updated_at = NOW() WHERE id = $1",
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
    // Note: TestimonialRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
