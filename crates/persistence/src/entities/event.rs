//! Unified event entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::EventStatus;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the booking_events table.
#[derive(Debug, Clone, FromRow)]
pub struct BookingEventEntity {
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

impl From<BookingEventEntity> for domain::models::BookingEvent {
    fn from(entity: BookingEventEntity) -> Self {
        Self {
            id: entity.id,
            club_id: entity.club_id,
            is_association_event: entity.is_association_event,
            title: entity.title,
            subtitle: entity.subtitle,
            description: entity.description,
            location: entity.location,
            location_details: entity.location_details,
            latitude: entity.latitude,
            longitude: entity.longitude,
            duration: entity.duration,
            start_date: entity.start_date,
            end_date: entity.end_date,
            event_date: entity.event_date,
            price: entity.price,
            original_price: entity.original_price,
            rating: entity.rating,
            review_count: entity.review_count,
            category: entity.category,
            languages: entity.languages,
            age_range: entity.age_range,
            min_age: entity.min_age,
            group_size: entity.group_size,
            max_people: entity.max_people,
            max_participants: entity.max_participants,
            current_participants: entity.current_participants,
            cancellation_policy: entity.cancellation_policy,
            images: entity.images,
            image: entity.image,
            highlights: entity.highlights,
            included: entity.included,
            not_included: entity.not_included,
            important_info: entity.important_info,
            status: entity.status,
            is_active: entity.is_active,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
