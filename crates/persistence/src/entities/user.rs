//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the users table.
///
/// Carries the password hash, which must never cross into the domain model.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub interests: Vec<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            profile_image_url: entity.profile_image_url,
            bio: entity.bio,
            phone: entity.phone,
            location: entity.location,
            interests: entity.interests,
            is_admin: entity.is_admin,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_drops_password_hash() {
        let entity = UserEntity {
            id: Uuid::new_v4(),
            username: Some("amina".to_string()),
            password_hash: Some("$argon2id$secret".to_string()),
            email: Some("amina@example.com".to_string()),
            first_name: None,
            last_name: None,
            profile_image_url: None,
            bio: None,
            phone: None,
            location: None,
            interests: vec![],
            is_admin: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let user: domain::models::User = entity.into();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert_eq!(user.username.as_deref(), Some("amina"));
    }
}
