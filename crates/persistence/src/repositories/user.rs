//! User repository for database operations.

use domain::models::user::UpdateProfileRequest;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

const USER_COLUMNS: &str = "id, username, password_hash, email, first_name, last_name, profile_image_url, bio, \
     phone, location, interests, is_admin, is_active, created_at, updated_at";

/// Repository for user database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by username. Used by login, so the entity (with its
    /// password hash) is returned.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_username");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a user with hashed credentials.
    pub async fn create(
        &self,
        id: Uuid,
        username: &str,
        password_hash: &str,
        email: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
        is_admin: bool,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (id, username, password_hash, email, first_name, last_name, is_admin)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(first_name)
        .bind(last_name)
        .bind(is_admin)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Upsert a user's profile fields by id.
    ///
    /// Inserts the row when it does not exist yet, otherwise applies the
    /// partial update; absent fields keep their stored values.
    pub async fn upsert_profile(
        &self,
        id: Uuid,
        request: &UpdateProfileRequest,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_user_profile");
        let result = sqlx::query_as::<_, UserEntity>(&format!(
            r#"
            INSERT INTO users (id, email, first_name, last_name, profile_image_url, bio, phone,
                               location, interests)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, '{{}}'))
            ON CONFLICT (id) DO UPDATE SET
                email = COALESCE($2, users.email),
                first_name = COALESCE($3, users.first_name),
                last_name = COALESCE($4, users.last_name),
                profile_image_url = COALESCE($5, users.profile_image_url),
                bio = COALESCE($6, users.bio),
                phone = COALESCE($7, users.phone),
                location = COALESCE($8, users.location),
                interests = COALESCE($9, users.interests),
                updated_at = NOW()
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&request.email)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.profile_image_url)
        .bind(&request.bio)
        .bind(&request.phone)
        .bind(&request.location)
        .bind(&request.interests)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Check whether a username is already taken.
    pub async fn username_exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("check_username_exists");
        let result =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: UserRepository tests require a database connection and are covered
    // by the integration tests in crates/api/tests.
}
