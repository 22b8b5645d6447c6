//! Media asset models.
//!
//! Media rows are upload records (the bytes live on external storage). They
//! have no ordering or visibility flag; lists come back newest-first and
//! deletion is hard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An uploaded image or video referenced by CMS content.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct MediaAsset {
    pub id: i32,
    pub file_name: String,
    pub file_type: String,
    pub file_url: String,
    pub thumbnail_url: Option<String>,
    pub alt_text: Option<String>,
    pub metadata: serde_json::Value,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Create payload for a media asset record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateMediaAssetRequest {
    #[validate(length(min = 1, max = 255, message = "File name is required"))]
    pub file_name: String,

    #[validate(length(min = 1, max = 50, message = "File type is required"))]
    pub file_type: String,

    #[validate(length(min = 1, max = 1000, message = "File URL is required"))]
    pub file_url: String,

    #[validate(length(max = 1000, message = "Thumbnail URL must be at most 1000 characters"))]
    pub thumbnail_url: Option<String>,

    #[validate(length(max = 500, message = "Alt text must be at most 500 characters"))]
    pub alt_text: Option<String>,

    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_media_asset_valid() {
        let request = CreateMediaAssetRequest {
            file_name: "hero.jpg".to_string(),
            file_type: "image/jpeg".to_string(),
            file_url: "/uploads/hero.jpg".to_string(),
            thumbnail_url: None,
            alt_text: Some("Hero image".to_string()),
            metadata: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_media_asset_requires_url() {
        let request = CreateMediaAssetRequest {
            file_name: "hero.jpg".to_string(),
            file_type: "image/jpeg".to_string(),
            file_url: String::new(),
            thumbnail_url: None,
            alt_text: None,
            metadata: None,
        };
        assert!(request.validate().is_err());
    }
}
