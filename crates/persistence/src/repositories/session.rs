//! Session repository for database operations.
//!
//! Sessions live in the database so a process restart does not invalidate
//! logged-in users. Lookups always filter on expiry; stale rows are reaped
//! opportunistically at login time.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{SessionEntity, SessionWithUserEntity};
use crate::metrics::QueryTimer;

/// Repository for session database operations.
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Creates a new SessionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for a user, valid for `ttl_secs` seconds.
    pub async fn create(
        &self,
        token_hash: &str,
        user_id: Uuid,
        ttl_secs: i64,
    ) -> Result<SessionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_session");
        let expires_at = Utc::now() + Duration::seconds(ttl_secs);
        let result = sqlx::query_as::<_, SessionEntity>(
            r#"
            INSERT INTO sessions (token_hash, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token_hash, user_id, expires_at, created_at
            "#,
        )
        .bind(token_hash)
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Resolve an unexpired session to its user, with the admin flag needed
    /// for authorization checks.
    pub async fn find_live_session(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionWithUserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_live_session");
        let result = sqlx::query_as::<_, SessionWithUserEntity>(
            r#"
            SELECT s.token_hash, s.user_id, s.expires_at,
                   u.is_admin, u.is_active AS user_is_active
            FROM sessions s
            JOIN users u ON s.user_id = u.id
            WHERE s.token_hash = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a session (logout).
    pub async fn delete(&self, token_hash: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_session");
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Remove expired sessions. Called opportunistically on login.
    pub async fn delete_expired(&self) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_expired_sessions");
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: SessionRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
