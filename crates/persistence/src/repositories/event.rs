//! Event repository for database operations.
//!
//! One table backs association-wide and club-scoped events; every listing
//! variant is a filter over the `is_association_event` discriminator. Child
//! rows (gallery, schedule, reviews, price tiers) are hard-deleted: nothing
//! else points at them.

use domain::models::event::{
    AddGalleryImageRequest, AddPriceTierRequest, AddReviewRequest, AddScheduleDayRequest,
    CreateEventRequest, EventGalleryImage, EventPriceTier, EventReview, EventScheduleDay,
    EventStatus, UpdateEventRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BookingEventEntity;
use crate::metrics::QueryTimer;

const EVENT_COLUMNS: &str = "id, club_id, is_association_event, title, subtitle, description, location, \
     location_details, latitude, longitude, duration, start_date, end_date, event_date, price, \
     original_price, rating, review_count, category, languages, age_range, min_age, group_size, \
     max_people, max_participants, current_participants, cancellation_policy, images, image, \
     highlights, included, not_included, important_info, status, is_active, created_by, \
     created_at, updated_at";

/// Repository for event database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active association-wide events, newest event date first.
    pub async fn list_association_events(&self) -> Result<Vec<BookingEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_association_events");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            r#"
            SELECT {EVENT_COLUMNS} FROM booking_events
            WHERE is_association_event = true AND is_active = true
            ORDER BY event_date DESC NULLS LAST
            "#
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a club's events, newest event date first.
    pub async fn list_club_events(
        &self,
        club_id: i32,
    ) -> Result<Vec<BookingEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_club_events");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            r#"
            SELECT {EVENT_COLUMNS} FROM booking_events
            WHERE club_id = $1 AND is_association_event = false AND is_active = true
            ORDER BY event_date DESC NULLS LAST
            "#
        ))
        .bind(club_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a club's upcoming events, soonest first.
    pub async fn list_upcoming_club_events(
        &self,
        club_id: i32,
    ) -> Result<Vec<BookingEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_upcoming_club_events");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            r#"
            SELECT {EVENT_COLUMNS} FROM booking_events
            WHERE club_id = $1 AND is_association_event = false AND is_active = true
              AND status = $2
            ORDER BY event_date ASC NULLS LAST
            "#
        ))
        .bind(club_id)
        .bind(EventStatus::Upcoming)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List every event regardless of scope or status (admin view),
    /// newest created first.
    pub async fn list_all(&self) -> Result<Vec<BookingEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_all_events");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            "SELECT {EVENT_COLUMNS} FROM booking_events ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an event by id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<BookingEventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            "SELECT {EVENT_COLUMNS} FROM booking_events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create an event. The caller has already validated the scope invariant
    /// and resolved the id (client-supplied or generated).
    pub async fn create(
        &self,
        id: &str,
        request: &CreateEventRequest,
        created_by: Option<Uuid>,
    ) -> Result<BookingEventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            r#"
            INSERT INTO booking_events (id, club_id, is_association_event, title, subtitle,
                description, location, location_details, latitude, longitude, duration,
                start_date, end_date, event_date, price, original_price, category, languages,
                age_range, min_age, group_size, max_people, max_participants,
                cancellation_policy, images, image, highlights, included, not_included,
                important_info, status, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                    CASE WHEN cardinality($18::text[]) = 0 THEN '{{English}}'::text[] ELSE $18 END,
                    $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
                    COALESCE($31, 'upcoming'), $32)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.club_id)
        .bind(request.is_association_event)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.description)
        .bind(&request.location)
        .bind(&request.location_details)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.duration)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.event_date)
        .bind(request.price)
        .bind(request.original_price)
        .bind(&request.category)
        .bind(&request.languages)
        .bind(&request.age_range)
        .bind(request.min_age)
        .bind(&request.group_size)
        .bind(request.max_people)
        .bind(request.max_participants)
        .bind(&request.cancellation_policy)
        .bind(&request.images)
        .bind(&request.image)
        .bind(&request.highlights)
        .bind(&request.included)
        .bind(&request.not_included)
        .bind(&request.important_info)
        .bind(request.status)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Partially update an event. `RowNotFound` when absent.
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateEventRequest,
    ) -> Result<BookingEventEntity, sqlx::Error> {
        let timer = QueryTimer::new("update_event");
        let result = sqlx::query_as::<_, BookingEventEntity>(&format!(
            r#"
            UPDATE booking_events
            SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                description = COALESCE($4, description),
                location = COALESCE($5, location),
                location_details = COALESCE($6, location_details),
                latitude = COALESCE($7, latitude),
                longitude = COALESCE($8, longitude),
                duration = COALESCE($9, duration),
                start_date = COALESCE($10, start_date),
                end_date = COALESCE($11, end_date),
                event_date = COALESCE($12, event_date),
                price = COALESCE($13, price),
                original_price = COALESCE($14, original_price),
                category = COALESCE($15, category),
                languages = COALESCE($16, languages),
                age_range = COALESCE($17, age_range),
                min_age = COALESCE($18, min_age),
                group_size = COALESCE($19, group_size),
                max_people = COALESCE($20, max_people),
                max_participants = COALESCE($21, max_participants),
                current_participants = COALESCE($22, current_participants),
                cancellation_policy = COALESCE($23, cancellation_policy),
                images = COALESCE($24, images),
                image = COALESCE($25, image),
                highlights = COALESCE($26, highlights),
                included = COALESCE($27, included),
                not_included = COALESCE($28, not_included),
                important_info = COALESCE($29, important_info),
                status = COALESCE($30, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&request.title)
        .bind(&request.subtitle)
        .bind(&request.description)
        .bind(&request.location)
        .bind(&request.location_details)
        .bind(request.latitude)
        .bind(request.longitude)
        .bind(&request.duration)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.event_date)
        .bind(request.price)
        .bind(request.original_price)
        .bind(&request.category)
        .bind(&request.languages)
        .bind(&request.age_range)
        .bind(request.min_age)
        .bind(&request.group_size)
        .bind(request.max_people)
        .bind(request.max_participants)
        .bind(request.current_participants)
        .bind(&request.cancellation_policy)
        .bind(&request.images)
        .bind(&request.image)
        .bind(&request.highlights)
        .bind(&request.included)
        .bind(&request.not_included)
        .bind(&request.important_info)
        .bind(request.status)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete an event and (via cascade) its child rows.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        let result = sqlx::query("DELETE FROM booking_events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// List an event's gallery images, sort order ascending.
    pub async fn list_gallery(&self, event_id: &str) -> Result<Vec<EventGalleryImage>, sqlx::Error> {
        let timer = QueryTimer::new("list_event_gallery");
        let result = sqlx::query_as::<_, EventGalleryImage>(
            r#"
            SELECT id, event_id, image_url, sort_order, created_at
            FROM event_gallery
            WHERE event_id = $1
            ORDER BY sort_order ASC, id ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Add a gallery image to an event.
    pub async fn add_gallery_image(
        &self,
        event_id: &str,
        request: &AddGalleryImageRequest,
    ) -> Result<EventGalleryImage, sqlx::Error> {
        let timer = QueryTimer::new("add_event_gallery_image");
        let result = sqlx::query_as::<_, EventGalleryImage>(
            r#"
            INSERT INTO event_gallery (event_id, image_url, sort_order)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, image_url, sort_order, created_at
            "#,
        )
        .bind(event_id)
        .bind(&request.image_url)
        .bind(request.sort_order)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete a gallery image.
    pub async fn delete_gallery_image(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event_gallery_image");
        let result = sqlx::query("DELETE FROM event_gallery WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Schedule
    // =========================================================================

    /// List an event's itinerary days in day order.
    pub async fn list_schedule(&self, event_id: &str) -> Result<Vec<EventScheduleDay>, sqlx::Error> {
        let timer = QueryTimer::new("list_event_schedule");
        let result = sqlx::query_as::<_, EventScheduleDay>(
            r#"
            SELECT id, event_id, day_number, title, description, created_at
            FROM event_schedule
            WHERE event_id = $1
            ORDER BY day_number ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Add an itinerary day to an event.
    pub async fn add_schedule_day(
        &self,
        event_id: &str,
        request: &AddScheduleDayRequest,
    ) -> Result<EventScheduleDay, sqlx::Error> {
        let timer = QueryTimer::new("add_event_schedule_day");
        let result = sqlx::query_as::<_, EventScheduleDay>(
            r#"
            INSERT INTO event_schedule (event_id, day_number, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, day_number, title, description, created_at
            "#,
        )
        .bind(event_id)
        .bind(request.day_number)
        .bind(&request.title)
        .bind(&request.description)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete an itinerary day.
    pub async fn delete_schedule_day(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event_schedule_day");
        let result = sqlx::query("DELETE FROM event_schedule WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// List an event's reviews, newest first.
    pub async fn list_reviews(&self, event_id: &str) -> Result<Vec<EventReview>, sqlx::Error> {
        let timer = QueryTimer::new("list_event_reviews");
        let result = sqlx::query_as::<_, EventReview>(
            r#"
            SELECT id, event_id, user_name, rating, review, created_at
            FROM event_reviews
            WHERE event_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Add a review to an event and bump its cached review aggregate.
    pub async fn add_review(
        &self,
        event_id: &str,
        request: &AddReviewRequest,
    ) -> Result<EventReview, sqlx::Error> {
        let timer = QueryTimer::new("add_event_review");

        let mut tx = self.pool.begin().await?;

        let review = sqlx::query_as::<_, EventReview>(
            r#"
            INSERT INTO event_reviews (event_id, user_name, rating, review)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, user_name, rating, review, created_at
            "#,
        )
        .bind(event_id)
        .bind(&request.user_name)
        .bind(request.rating)
        .bind(&request.review)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            UPDATE booking_events
            SET review_count = (SELECT COUNT(*) FROM event_reviews WHERE event_id = $1),
                rating = (SELECT GREATEST(1, LEAST(5, ROUND(AVG(rating))))::int
                          FROM event_reviews WHERE event_id = $1),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok(review)
    }

    /// Hard delete a review.
    pub async fn delete_review(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event_review");
        let result = sqlx::query("DELETE FROM event_reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    // =========================================================================
    // Price tiers
    // =========================================================================

    /// List an event's price tiers by group size.
    pub async fn list_price_tiers(&self, event_id: &str) -> Result<Vec<EventPriceTier>, sqlx::Error> {
        let timer = QueryTimer::new("list_event_price_tiers");
        let result = sqlx::query_as::<_, EventPriceTier>(
            r#"
            SELECT id, event_id, travelers, price_per_person
            FROM event_prices
            WHERE event_id = $1
            ORDER BY travelers ASC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Add a price tier to an event.
    pub async fn add_price_tier(
        &self,
        event_id: &str,
        request: &AddPriceTierRequest,
    ) -> Result<EventPriceTier, sqlx::Error> {
        let timer = QueryTimer::new("add_event_price_tier");
        let result = sqlx::query_as::<_, EventPriceTier>(
            r#"
            INSERT INTO event_prices (event_id, travelers, price_per_person)
            VALUES ($1, $2, $3)
            RETURNING id, event_id, travelers, price_per_person
            "#,
        )
        .bind(event_id)
        .bind(request.travelers)
        .bind(request.price_per_person)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete a price tier.
    pub async fn delete_price_tier(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_event_price_tier");
        let result = sqlx::query("DELETE FROM event_prices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    // Note: EventRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
