//! Club and club-membership domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Role within a club. Stored on the membership row; not currently enforced
/// by any permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ClubRole {
    Member,
    Moderator,
    Admin,
}

impl ClubRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubRole::Member => "member",
            ClubRole::Moderator => "moderator",
            ClubRole::Admin => "admin",
        }
    }
}

impl FromStr for ClubRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "member" => Ok(ClubRole::Member),
            "moderator" => Ok(ClubRole::Moderator),
            "admin" => Ok(ClubRole::Admin),
            _ => Err(format!("Invalid club role: {}", s)),
        }
    }
}

impl fmt::Display for ClubRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An adventure club listed on the site.
///
/// `member_count` is a cached aggregate maintained transactionally by the
/// join/leave operations; it is never recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub long_description: Option<String>,
    pub image: Option<String>,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub member_count: i32,
    pub features: Vec<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub website: Option<String>,
    pub social_links: serde_json::Value,
    pub rating: i32,
    pub established: Option<String>,
    pub is_active: bool,
    pub owner_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user's membership in a club.
///
/// At most one logical row exists per (user, club) pair; leaving flips
/// `is_active` and re-joining reactivates the same row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ClubMembership {
    pub id: i32,
    pub user_id: Uuid,
    pub club_id: i32,
    pub role: ClubRole,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

/// Request payload for creating a club.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateClubRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub long_description: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub image: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub features: Vec<String>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub contact_phone: Option<String>,

    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 500, message = "Website must be at most 500 characters"))]
    pub website: Option<String>,

    pub social_links: Option<serde_json::Value>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: Option<i32>,

    #[validate(length(max = 100, message = "Established must be at most 100 characters"))]
    pub established: Option<String>,
}

/// Partial club update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateClubRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    pub long_description: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub image: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location cannot be empty"))]
    pub location: Option<String>,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    pub features: Option<Vec<String>>,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub contact_phone: Option<String>,

    #[validate(email(message = "Invalid contact email"))]
    pub contact_email: Option<String>,

    #[validate(length(max = 500, message = "Website must be at most 500 characters"))]
    pub website: Option<String>,

    pub social_links: Option<serde_json::Value>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: Option<i32>,

    #[validate(length(max = 100, message = "Established must be at most 100 characters"))]
    pub established: Option<String>,
}

/// Response for the membership-status check endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MembershipStatus {
    pub is_member: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_club_role_roundtrip() {
        for role in [ClubRole::Member, ClubRole::Moderator, ClubRole::Admin] {
            let parsed: ClubRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_club_role_parse_is_case_insensitive() {
        assert_eq!("MODERATOR".parse::<ClubRole>().unwrap(), ClubRole::Moderator);
    }

    #[test]
    fn test_club_role_parse_rejects_unknown() {
        assert!("owner".parse::<ClubRole>().is_err());
    }

    #[test]
    fn test_create_club_request_valid() {
        let request = CreateClubRequest {
            name: "Atlas Hikers".to_string(),
            description: "Mountain trekking and hiking adventures".to_string(),
            long_description: None,
            image: None,
            location: "Atlas Mountains".to_string(),
            latitude: Some(31.06),
            longitude: Some(-7.91),
            features: vec!["Hiking".to_string(), "Camping".to_string()],
            contact_phone: None,
            contact_email: Some("hello@atlashikers.ma".to_string()),
            website: None,
            social_links: None,
            rating: Some(5),
            established: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_club_request_rejects_bad_latitude() {
        let request = CreateClubRequest {
            name: "Atlas Hikers".to_string(),
            description: "desc".to_string(),
            long_description: None,
            image: None,
            location: "Atlas Mountains".to_string(),
            latitude: Some(123.0),
            longitude: None,
            features: vec![],
            contact_phone: None,
            contact_email: None,
            website: None,
            social_links: None,
            rating: None,
            established: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_club_request_empty_is_valid() {
        assert!(UpdateClubRequest::default().validate().is_ok());
    }

    #[test]
    fn test_update_club_request_rejects_empty_name() {
        let request = UpdateClubRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
