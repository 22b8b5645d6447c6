//! Team member repository for the "Our Team" CMS collection.

use domain::models::landing::{CreateTeamMemberRequest, TeamMember, UpdateTeamMemberRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::metrics::QueryTimer;

/// Repository for team member database operations.
#[derive(Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    /// Creates a new TeamMemberRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active team members, ordering ascending.
    pub async fn list(&self) -> Result<Vec<TeamMember>, sqlx::Error> {
        let timer = QueryTimer::new("list_team_members");
        let result = sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE is_active = true ORDER BY ordering ASC",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active team member by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TeamMember>, sqlx::Error> {
        let timer = QueryTimer::new("find_team_member_by_id");
        let result = sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a team member.
    pub async fn create(
        &self,
        request: &CreateTeamMemberRequest,
        created_by: Option<Uuid>,
    ) -> Result<TeamMember, sqlx::Error> {
        let timer = QueryTimer::new("create_team_member");
        let result = sqlx::query_as::<_, TeamMember>(
            r#"
            INSERT INTO team_members (name, role, bio, photo_id, email, phone, social_links,
                ordering, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, '{}'::jsonb), $8, $9)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.bio)
        .bind(request.photo_id)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.social_links)
        .bind(request.ordering)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update a team member. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateTeamMemberRequest,
    ) -> Result<TeamMember, sqlx::Error> {
        let timer = QueryTimer::new("update_team_member");
        let result = sqlx::query_as::<_, TeamMember>(
            r#"
            UPDATE team_members
            SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                bio = COALESCE($4, bio),
                photo_id = COALESCE($5, photo_id),
                email = COALESCE($6, email),
                phone = COALESCE($7, phone),
                social_links = COALESCE($8, social_links),
                ordering = COALESCE($9, ordering),
                is_active = COALESCE($10, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.bio)
        .bind(request.photo_id)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.social_links)
        .bind(request.ordering)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a team member.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_team_member");
        let result = sqlx::query(
            "UPDATE team_members SET is_active = false, updated_at = NOW() WHERE id = $1",
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
    // Note: TeamMemberRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
