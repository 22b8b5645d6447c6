//! Session entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the sessions table.
///
/// `token_hash` is the SHA-256 digest of the opaque cookie token; the raw
/// token is never stored.
#[derive(Debug, Clone, FromRow)]
pub struct SessionEntity {
    pub token_hash: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Session joined with the owning user, as loaded on each authenticated
/// request.
#[derive(Debug, Clone, FromRow)]
pub struct SessionWithUserEntity {
    pub token_hash: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub is_admin: bool,
    pub user_is_active: bool,
}
