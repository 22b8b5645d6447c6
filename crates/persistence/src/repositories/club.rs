//! Club repository for database operations.
//!
//! Owns the membership state machine: join/leave run in a single transaction
//! that flips the membership row and recomputes the club's cached
//! `member_count` from the live rows, so the count can never drift.

use domain::models::club::{ClubRole, CreateClubRequest, UpdateClubRequest};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ClubEntity, ClubMembershipEntity};
use crate::metrics::QueryTimer;

const CLUB_COLUMNS: &str = "id, name, description, long_description, image, location, latitude, longitude, \
     member_count, features, contact_phone, contact_email, website, social_links, rating, \
     established, is_active, owner_id, created_at, updated_at";

const MEMBERSHIP_COLUMNS: &str = "id, user_id, club_id, role, is_active, joined_at";

/// Repository for club and club-membership database operations.
#[derive(Clone)]
pub struct ClubRepository {
    pool: PgPool,
}

impl ClubRepository {
    /// Creates a new ClubRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active clubs, name ascending.
    pub async fn list(&self) -> Result<Vec<ClubEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_clubs");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE is_active = true ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active club by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClubEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_club_by_id");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE id = $1 AND is_active = true"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an active club by exact name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ClubEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_club_by_name");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            "SELECT {CLUB_COLUMNS} FROM clubs WHERE name = $1 AND is_active = true"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a club.
    pub async fn create(
        &self,
        request: &CreateClubRequest,
        owner_id: Option<Uuid>,
    ) -> Result<ClubEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_club");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            r#"
            INSERT INTO clubs (name, description, long_description, image, location, latitude,
                               longitude, features, contact_phone, contact_email, website,
                               social_links, rating, established, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    COALESCE($12, '{{}}'::jsonb), COALESCE($13, 5), $14, $15)
            RETURNING {CLUB_COLUMNS}
            "#
        ))
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.long_description)
        .bind(&request.image)
        .bind(&request.location)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.features)
        .bind(&request.contact_phone)
        .bind(&request.contact_email)
        .bind(&request.website)
        .bind(&request.social_links)
        .bind(request.rating)
        .bind(&request.established)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update an active club. `RowNotFound` when the club is
    /// missing or soft-deleted.
    pub async fn update(
        &self,
        id: i32,
        request: &UpdateClubRequest,
    ) -> Result<ClubEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_club");
        let result = sqlx::query_as::<_, ClubEntity>(&format!(
            r#"
            UPDATE clubs
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                long_description = COALESCE($4, long_description),
                image = COALESCE($5, image),
                location = COALESCE($6, location),
                latitude = COALESCE($7, latitude),
                longitude = COALESCE($8, longitude),
                features = COALESCE($9, features),
                contact_phone = COALESCE($10, contact_phone),
                contact_email = COALESCE($11, contact_email),
                website = COALESCE($12, website),
                social_links = COALESCE($13, social_links),
                rating = COALESCE($14, rating),
                established = COALESCE($15, established),
                updated_at = NOW()
            WHERE id = $1 AND is_active = true
            RETURNING {CLUB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.long_description)
        .bind(&request.image)
        .bind(&request.location)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.features)
        .bind(&request.contact_phone)
        .bind(&request.contact_email)
        .bind(&request.website)
        .bind(&request.social_links)
        .bind(request.rating)
        .bind(&request.established)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a club. Existing bookings keep their event references;
    /// only default list/get visibility changes.
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_club");
        let result = sqlx::query(
            "UPDATE clubs SET is_active = false, updated_at = NOW() WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Join a club.
    ///
    /// Looks up the membership row in any state: a missing row is inserted,
    /// an inactive row is reactivated (preserving its join history), and an
    /// already-active row is left as is, which makes re-joining idempotent.
    /// The member count is recomputed from the live rows inside the same
    /// transaction, so concurrent joins/leaves on one club serialize on the
    /// club row instead of double-counting.
    pub async fn join_club(
        &self,
        user_id: Uuid,
        club_id: i32,
    ) -> Result<ClubMembershipEntity, sqlx::Error> {
        let timer = QueryTimer::new("join_club");

        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, ClubMembershipEntity>(&format!(
            "SELECT {MEMBERSHIP_COLUMNS} FROM club_memberships WHERE user_id = $1 AND club_id = $2"
        ))
        .bind(user_id)
        .bind(club_id)
        .fetch_optional(&mut *tx)
        .await?;

        let membership = match existing {
            Some(row) => {
                sqlx::query_as::<_, ClubMembershipEntity>(&format!(
                    r#"
                    UPDATE club_memberships
                    SET is_active = true
                    WHERE id = $1
                    RETURNING {MEMBERSHIP_COLUMNS}
                    "#
                ))
                .bind(row.id)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as::<_, ClubMembershipEntity>(&format!(
                    r#"
                    INSERT INTO club_memberships (user_id, club_id, role)
                    VALUES ($1, $2, $3)
                    RETURNING {MEMBERSHIP_COLUMNS}
                    "#
                ))
                .bind(user_id)
                .bind(club_id)
                .bind(ClubRole::Member)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        Self::refresh_member_count(&mut tx, club_id).await?;

        tx.commit().await?;
        timer.record();
        Ok(membership)
    }

    /// Leave a club.
    ///
    /// Leaving a club never joined is a no-op on the membership rows; the
    /// count recomputation still runs and lands on the true value.
    pub async fn leave_club(&self, user_id: Uuid, club_id: i32) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("leave_club");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE club_memberships SET is_active = false WHERE user_id = $1 AND club_id = $2",
        )
        .bind(user_id)
        .bind(club_id)
        .execute(&mut *tx)
        .await?;

        Self::refresh_member_count(&mut tx, club_id).await?;

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Recompute `clubs.member_count` from the active membership rows.
    ///
    /// Must run inside the caller's transaction: the count and the club
    /// update are not atomic against each other otherwise.
    async fn refresh_member_count(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        club_id: i32,
    ) -> Result<(), sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM club_memberships WHERE club_id = $1 AND is_active = true",
        )
        .bind(club_id)
        .fetch_one(&mut **tx)
        .await?;

        sqlx::query("UPDATE clubs SET member_count = $2, updated_at = NOW() WHERE id = $1")
            .bind(club_id)
            .bind(count as i32)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// List a user's active memberships.
    pub async fn list_user_memberships(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ClubMembershipEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_user_memberships");
        let result = sqlx::query_as::<_, ClubMembershipEntity>(&format!(
            r#"
            SELECT {MEMBERSHIP_COLUMNS} FROM club_memberships
            WHERE user_id = $1 AND is_active = true
            ORDER BY joined_at ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a club's active members.
    pub async fn list_club_members(
        &self,
        club_id: i32,
    ) -> Result<Vec<ClubMembershipEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_club_members");
        let result = sqlx::query_as::<_, ClubMembershipEntity>(&format!(
            r#"
            SELECT {MEMBERSHIP_COLUMNS} FROM club_memberships
            WHERE club_id = $1 AND is_active = true
            ORDER BY joined_at ASC
            "#
        ))
        .bind(club_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Check whether a user is an active member of a club.
    pub async fn is_member(&self, user_id: Uuid, club_id: i32) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("is_club_member");
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM club_memberships
                WHERE user_id = $1 AND club_id = $2 AND is_active = true
            )
            "#,
        )
        .bind(user_id)
        .bind(club_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: ClubRepository tests require a database connection and are covered
    // by the integration tests in crates/api/tests.
}
