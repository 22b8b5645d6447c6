//! Ordered CMS collection models.
//!
//! Every collection row carries an `ordering` index and an `is_active`
//! soft-delete flag; public lists return active rows in ordering-ascending
//! order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A configurable landing page section.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct LandingSection {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub section_type: String,
    pub ordering: i32,
    pub is_active: bool,
    pub background_color: Option<String>,
    pub background_media_id: Option<i32>,
    pub custom_css: Option<String>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A content block inside a landing section.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct SectionBlock {
    pub id: i32,
    pub section_id: i32,
    pub block_type: String,
    pub ordering: i32,
    pub content: serde_json::Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An entry in the "Our Focus" section.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct FocusItem {
    pub id: i32,
    pub title: String,
    pub icon: Option<String>,
    pub description: String,
    pub ordering: i32,
    pub is_active: bool,
    pub media_id: Option<i32>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An entry in the "Our Team" section.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct TeamMember {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_id: Option<i32>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: serde_json::Value,
    pub ordering: i32,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A site testimonial. Public lists only include approved entries.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct LandingTestimonial {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub photo_id: Option<i32>,
    pub rating: i32,
    pub feedback: String,
    pub is_approved: bool,
    pub is_active: bool,
    pub ordering: i32,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A headline metric displayed in the stats strip.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct SiteStat {
    pub id: i32,
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    pub suffix: Option<String>,
    pub ordering: i32,
    pub is_active: bool,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A partner organization shown in the partners section.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub logo_id: Option<i32>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub ordering: i32,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Create payload for a landing section.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateSectionRequest {
    #[validate(length(min = 1, max = 100, message = "Slug is required"))]
    pub slug: String,

    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 50, message = "Section type is required"))]
    pub section_type: String,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,

    #[validate(length(max = 50, message = "Background color must be at most 50 characters"))]
    pub background_color: Option<String>,

    pub background_media_id: Option<i32>,
    pub custom_css: Option<String>,
}

/// Partial update payload for a landing section.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateSectionRequest {
    #[validate(length(min = 1, max = 100, message = "Slug cannot be empty"))]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Section type cannot be empty"))]
    pub section_type: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    #[validate(length(max = 50, message = "Background color must be at most 50 characters"))]
    pub background_color: Option<String>,

    pub background_media_id: Option<i32>,
    pub custom_css: Option<String>,
    pub is_active: Option<bool>,
}

/// Create payload for a section block.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateBlockRequest {
    pub section_id: i32,

    #[validate(length(min = 1, max = 50, message = "Block type is required"))]
    pub block_type: String,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,

    #[serde(default = "default_block_content")]
    pub content: serde_json::Value,
}

fn default_block_content() -> serde_json::Value {
    serde_json::json!({})
}

/// Partial update payload for a section block.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateBlockRequest {
    #[validate(length(min = 1, max = 50, message = "Block type cannot be empty"))]
    pub block_type: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    pub content: Option<serde_json::Value>,
    pub is_active: Option<bool>,
}

/// Create payload for a focus item.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateFocusItemRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    #[validate(length(max = 100, message = "Icon must be at most 100 characters"))]
    pub icon: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,

    pub media_id: Option<i32>,
}

/// Partial update payload for a focus item.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateFocusItemRequest {
    #[validate(length(min = 1, max = 255, message = "Title cannot be empty"))]
    pub title: Option<String>,

    #[validate(length(max = 100, message = "Icon must be at most 100 characters"))]
    pub icon: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    pub media_id: Option<i32>,
    pub is_active: Option<bool>,
}

/// Create payload for a team member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTeamMemberRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, max = 255, message = "Role is required"))]
    pub role: String,

    pub bio: Option<String>,
    pub photo_id: Option<i32>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    pub social_links: Option<serde_json::Value>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,
}

/// Partial update payload for a team member.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTeamMemberRequest {
    #[validate(length(min = 1, max = 255, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Role cannot be empty"))]
    pub role: Option<String>,

    pub bio: Option<String>,
    pub photo_id: Option<i32>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub phone: Option<String>,

    pub social_links: Option<serde_json::Value>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    pub is_active: Option<bool>,
}

/// Create payload for a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTestimonialRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(length(max = 255, message = "Role must be at most 255 characters"))]
    pub role: Option<String>,

    pub photo_id: Option<i32>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    #[serde(default = "default_rating")]
    pub rating: i32,

    #[validate(length(min = 1, message = "Feedback is required"))]
    pub feedback: String,

    #[serde(default)]
    pub is_approved: bool,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,

    pub user_id: Option<Uuid>,
}

fn default_rating() -> i32 {
    5
}

/// Partial update payload for a testimonial.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTestimonialRequest {
    #[validate(length(min = 1, max = 255, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "Role must be at most 255 characters"))]
    pub role: Option<String>,

    pub photo_id: Option<i32>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: Option<i32>,

    #[validate(length(min = 1, message = "Feedback cannot be empty"))]
    pub feedback: Option<String>,

    pub is_approved: Option<bool>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    pub is_active: Option<bool>,
}

/// Create payload for a site stat.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateStatRequest {
    #[validate(length(min = 1, max = 255, message = "Label is required"))]
    pub label: String,

    #[validate(length(min = 1, max = 100, message = "Value is required"))]
    pub value: String,

    #[validate(length(max = 100, message = "Icon must be at most 100 characters"))]
    pub icon: Option<String>,

    #[validate(length(max = 20, message = "Suffix must be at most 20 characters"))]
    pub suffix: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,
}

/// Partial update payload for a site stat.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateStatRequest {
    #[validate(length(min = 1, max = 255, message = "Label cannot be empty"))]
    pub label: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Value cannot be empty"))]
    pub value: Option<String>,

    #[validate(length(max = 100, message = "Icon must be at most 100 characters"))]
    pub icon: Option<String>,

    #[validate(length(max = 20, message = "Suffix must be at most 20 characters"))]
    pub suffix: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    pub is_active: Option<bool>,
}

/// Create payload for a partner.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreatePartnerRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    pub logo_id: Option<i32>,

    #[validate(length(max = 500, message = "Website URL must be at most 500 characters"))]
    pub website_url: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub ordering: i32,
}

/// Partial update payload for a partner.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdatePartnerRequest {
    #[validate(length(min = 1, max = 255, message = "Name cannot be empty"))]
    pub name: Option<String>,

    pub logo_id: Option<i32>,

    #[validate(length(max = 500, message = "Website URL must be at most 500 characters"))]
    pub website_url: Option<String>,

    pub description: Option<String>,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    pub ordering: Option<i32>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_section_request_valid() {
        let request = CreateSectionRequest {
            slug: "our-focus".to_string(),
            title: "Our Focus".to_string(),
            section_type: "focus".to_string(),
            ordering: 2,
            background_color: None,
            background_media_id: None,
            custom_css: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_section_rejects_empty_slug() {
        let request = CreateSectionRequest {
            slug: String::new(),
            title: "Our Focus".to_string(),
            section_type: "focus".to_string(),
            ordering: 0,
            background_color: None,
            background_media_id: None,
            custom_css: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_testimonial_default_rating_is_five() {
        let request: CreateTestimonialRequest = serde_json::from_value(serde_json::json!({
            "name": "Youssef",
            "feedback": "Unforgettable trip"
        }))
        .unwrap();
        assert_eq!(request.rating, 5);
        assert!(!request.is_approved);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_testimonial_update_rejects_bad_rating() {
        let request = UpdateTestimonialRequest {
            rating: Some(9),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_block_content_defaults_to_empty_object() {
        let request: CreateBlockRequest = serde_json::from_value(serde_json::json!({
            "section_id": 1,
            "block_type": "text"
        }))
        .unwrap();
        assert_eq!(request.content, serde_json::json!({}));
    }

    #[test]
    fn test_negative_ordering_rejected() {
        let request = UpdateStatRequest {
            ordering: Some(-3),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
