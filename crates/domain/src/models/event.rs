//! Unified event domain models.
//!
//! One table backs both association-wide events and club-scoped events,
//! discriminated by `is_association_event`. Club events must carry a club
//! reference; association events must not. The database does not enforce
//! this, so the create/update DTOs validate it.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(EventStatus::Draft),
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(format!("Invalid event status: {}", s)),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const EVENT_ID_SUFFIX_LEN: usize = 6;
const BASE36_LOWER: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a time-plus-random event identifier, e.g. `1718800000000-k3x9qa`.
///
/// Used when a create request does not supply its own id. Events are joined
/// to galleries, schedules, reviews, prices and tickets by this string key.
pub fn generate_event_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..EVENT_ID_SUFFIX_LEN)
        .map(|_| BASE36_LOWER[rng.gen_range(0..BASE36_LOWER.len())] as char)
        .collect();
    format!("{}-{}", millis, suffix)
}

/// An event, either association-wide or club-scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BookingEvent {
    pub id: String,
    pub club_id: Option<i32>,
    pub is_association_event: bool,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub location: String,
    pub location_details: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub duration: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_date: Option<DateTime<Utc>>,
    pub price: i32,
    pub original_price: Option<i32>,
    pub rating: i32,
    pub review_count: i32,
    pub category: Option<String>,
    pub languages: Vec<String>,
    pub age_range: Option<String>,
    pub min_age: Option<i32>,
    pub group_size: Option<String>,
    pub max_people: Option<i32>,
    pub max_participants: Option<i32>,
    pub current_participants: i32,
    pub cancellation_policy: Option<String>,
    pub images: Vec<String>,
    pub image: Option<String>,
    pub highlights: Vec<String>,
    pub included: Vec<String>,
    pub not_included: Vec<String>,
    pub important_info: Option<String>,
    pub status: EventStatus,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One image in an event's carousel gallery.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct EventGalleryImage {
    pub id: i32,
    pub event_id: String,
    pub image_url: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// One day of a multi-day event itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct EventScheduleDay {
    pub id: i32,
    pub event_id: String,
    pub day_number: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A visitor review attached to an event.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct EventReview {
    pub id: i32,
    pub event_id: String,
    pub user_name: Option<String>,
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Group-size-based price tier for an event.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "snake_case")]
pub struct EventPriceTier {
    pub id: i32,
    pub event_id: String,
    pub travelers: i32,
    pub price_per_person: f64,
}

/// Event detail with its child collections, as served by the detail endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: BookingEvent,
    pub gallery: Vec<EventGalleryImage>,
    pub schedule: Vec<EventScheduleDay>,
    pub reviews: Vec<EventReview>,
    pub price_tiers: Vec<EventPriceTier>,
}

/// A club event needs a club; an association event must not have one.
fn check_event_scope(
    is_association_event: bool,
    club_id: Option<i32>,
) -> Result<(), ValidationError> {
    match (is_association_event, club_id) {
        (false, None) => {
            let mut err = ValidationError::new("club_required");
            err.message = Some("Club events must reference a club".into());
            Err(err)
        }
        (true, Some(_)) => {
            let mut err = ValidationError::new("club_forbidden");
            err.message = Some("Association events cannot reference a club".into());
            Err(err)
        }
        _ => Ok(()),
    }
}

/// Request payload for creating an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateEventRequest {
    /// Optional client-supplied identifier; generated when absent.
    #[validate(length(min = 1, max = 255, message = "Event id cannot be empty"))]
    pub id: Option<String>,

    pub club_id: Option<i32>,

    #[serde(default)]
    pub is_association_event: bool,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: String,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[validate(length(min = 1, max = 255, message = "Location is required"))]
    pub location: String,

    #[validate(length(max = 255, message = "Location details must be at most 255 characters"))]
    pub location_details: Option<String>,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    #[validate(length(max = 100, message = "Duration must be at most 100 characters"))]
    pub duration: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "Price must be non-negative"))]
    pub price: i32,

    #[validate(range(min = 0, message = "Original price must be non-negative"))]
    pub original_price: Option<i32>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[validate(length(max = 100, message = "Age range must be at most 100 characters"))]
    pub age_range: Option<String>,

    #[validate(range(min = 0, message = "Minimum age must be non-negative"))]
    pub min_age: Option<i32>,

    #[validate(length(max = 100, message = "Group size must be at most 100 characters"))]
    pub group_size: Option<String>,

    #[validate(range(min = 1, message = "Max people must be positive"))]
    pub max_people: Option<i32>,

    #[validate(range(min = 1, message = "Max participants must be positive"))]
    pub max_participants: Option<i32>,

    pub cancellation_policy: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub image: Option<String>,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub included: Vec<String>,

    #[serde(default)]
    pub not_included: Vec<String>,

    pub important_info: Option<String>,

    pub status: Option<EventStatus>,
}

impl CreateEventRequest {
    /// Check the scope invariant the database cannot express: a club event
    /// must reference a club, an association event must not.
    pub fn validate_scope(&self) -> Result<(), ValidationError> {
        check_event_scope(self.is_association_event, self.club_id)
    }
}

/// Partial event update; absent fields are left untouched.
///
/// Scope (`is_association_event` / `club_id`) cannot be changed after
/// creation; updates that try are rejected at the route layer.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Subtitle must be at most 255 characters"))]
    pub subtitle: Option<String>,

    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Location cannot be empty"))]
    pub location: Option<String>,

    #[validate(length(max = 255, message = "Location details must be at most 255 characters"))]
    pub location_details: Option<String>,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    #[validate(length(max = 100, message = "Duration must be at most 100 characters"))]
    pub duration: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_date: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "Price must be non-negative"))]
    pub price: Option<i32>,

    #[validate(range(min = 0, message = "Original price must be non-negative"))]
    pub original_price: Option<i32>,

    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: Option<String>,

    pub languages: Option<Vec<String>>,

    #[validate(length(max = 100, message = "Age range must be at most 100 characters"))]
    pub age_range: Option<String>,

    #[validate(range(min = 0, message = "Minimum age must be non-negative"))]
    pub min_age: Option<i32>,

    #[validate(length(max = 100, message = "Group size must be at most 100 characters"))]
    pub group_size: Option<String>,

    #[validate(range(min = 1, message = "Max people must be positive"))]
    pub max_people: Option<i32>,

    #[validate(range(min = 1, message = "Max participants must be positive"))]
    pub max_participants: Option<i32>,

    #[validate(range(min = 0, message = "Current participants must be non-negative"))]
    pub current_participants: Option<i32>,

    pub cancellation_policy: Option<String>,

    pub images: Option<Vec<String>>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    pub image: Option<String>,

    pub highlights: Option<Vec<String>>,
    pub included: Option<Vec<String>>,
    pub not_included: Option<Vec<String>>,
    pub important_info: Option<String>,
    pub status: Option<EventStatus>,
}

/// Request payload for adding a gallery image to an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AddGalleryImageRequest {
    #[validate(length(min = 1, max = 500, message = "Image URL is required"))]
    pub image_url: String,

    #[validate(custom(function = "shared::validation::validate_ordering"))]
    #[serde(default)]
    pub sort_order: i32,
}

/// Request payload for adding an itinerary day to an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AddScheduleDayRequest {
    #[validate(range(min = 1, message = "Day number must be positive"))]
    pub day_number: i32,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,
}

/// Request payload for adding a review to an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AddReviewRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub user_name: Option<String>,

    #[validate(custom(function = "shared::validation::validate_rating"))]
    pub rating: i32,

    pub review: Option<String>,
}

/// Request payload for adding a price tier to an event.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct AddPriceTierRequest {
    #[validate(range(min = 1, message = "Travelers must be positive"))]
    pub travelers: i32,

    #[validate(range(min = 0.0, message = "Price per person must be non-negative"))]
    pub price_per_person: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> CreateEventRequest {
        CreateEventRequest {
            id: None,
            club_id: Some(1),
            is_association_event: false,
            title: "Toubkal Ascent".to_string(),
            subtitle: None,
            description: "Two-day guided ascent".to_string(),
            location: "Imlil".to_string(),
            location_details: None,
            latitude: None,
            longitude: None,
            duration: Some("2 days".to_string()),
            start_date: None,
            end_date: None,
            event_date: None,
            price: 1200,
            original_price: None,
            category: Some("trek".to_string()),
            languages: vec!["English".to_string()],
            age_range: None,
            min_age: Some(16),
            group_size: None,
            max_people: None,
            max_participants: Some(12),
            cancellation_policy: None,
            images: vec![],
            image: None,
            highlights: vec![],
            included: vec![],
            not_included: vec![],
            important_info: None,
            status: None,
        }
    }

    #[test]
    fn test_event_status_roundtrip() {
        for status in [
            EventStatus::Draft,
            EventStatus::Upcoming,
            EventStatus::Ongoing,
            EventStatus::Completed,
            EventStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<EventStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_generate_event_id_shape() {
        let id = generate_event_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_event_id_unique() {
        assert_ne!(generate_event_id(), generate_event_id());
    }

    #[test]
    fn test_club_event_requires_club() {
        let mut request = minimal_request();
        request.club_id = None;
        request.is_association_event = false;
        assert!(request.validate_scope().is_err());
    }

    #[test]
    fn test_association_event_rejects_club() {
        let mut request = minimal_request();
        request.club_id = Some(3);
        request.is_association_event = true;
        assert!(request.validate_scope().is_err());
    }

    #[test]
    fn test_association_event_without_club_is_valid() {
        let mut request = minimal_request();
        request.club_id = None;
        request.is_association_event = true;
        assert!(request.validate_scope().is_ok());
    }

    #[test]
    fn test_club_event_with_club_is_valid() {
        let request = minimal_request();
        assert!(request.validate().is_ok());
        assert!(request.validate_scope().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut request = minimal_request();
        request.price = -1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_review_rating_bounds() {
        let request = AddReviewRequest {
            user_name: None,
            rating: 0,
            review: None,
        };
        assert!(request.validate().is_err());

        let request = AddReviewRequest {
            user_name: None,
            rating: 4,
            review: Some("Great trek".to_string()),
        };
        assert!(request.validate().is_ok());
    }
}
