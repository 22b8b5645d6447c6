//! User domain models and profile DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A registered member of the association.
///
/// The password hash never leaves the persistence layer; this model is the
/// public shape returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    pub username: Option<String>,
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

/// Request payload for account registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RegisterRequest {
    #[validate(length(
        min = 3,
        max = 64,
        message = "Username must be between 3 and 64 characters"
    ))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,
}

/// Request payload for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub profile_image_url: Option<String>,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,

    pub interests: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            username: "amina".to_string(),
            email: "amina@example.com".to_string(),
            password: "long-enough-password".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_short_password() {
        let request = RegisterRequest {
            username: "amina".to_string(),
            email: "amina@example.com".to_string(),
            password: "short".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            username: "amina".to_string(),
            email: "not-an-email".to_string(),
            password: "long-enough-password".to_string(),
            first_name: None,
            last_name: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_profile_all_absent_is_valid() {
        let request = UpdateProfileRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_serialization_has_no_password() {
        let user = User {
            id: Uuid::new_v4(),
            username: Some("amina".to_string()),
            email: Some("amina@example.com".to_string()),
            first_name: None,
            last_name: None,
            profile_image_url: None,
            bio: None,
            phone: None,
            location: None,
            interests: vec!["hiking".to_string()],
            is_admin: false,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"username\":\"amina\""));
    }
}
