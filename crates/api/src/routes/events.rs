//! Event routes: public browsing plus the admin management surface.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::event::{
    generate_event_id, AddGalleryImageRequest, AddPriceTierRequest, AddReviewRequest,
    AddScheduleDayRequest, CreateEventRequest, EventDetail, EventGalleryImage, EventPriceTier,
    EventReview, EventScheduleDay, UpdateEventRequest,
};
use domain::models::{BookingEvent, ListResponse};
use persistence::repositories::{ClubRepository, EventRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;

/// List association-wide events.
///
/// GET /api/events
pub async fn list_association_events(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<BookingEvent>>, ApiError> {
    let events = EventRepository::new(state.pool.clone())
        .list_association_events()
        .await?;

    Ok(Json(ListResponse::new(
        events.into_iter().map(BookingEvent::from).collect(),
    )))
}

/// Event detail with gallery, itinerary, reviews and price tiers.
///
/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventDetail>, ApiError> {
    let repo = EventRepository::new(state.pool.clone());

    let event = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let gallery = repo.list_gallery(&id).await?;
    let schedule = repo.list_schedule(&id).await?;
    let reviews = repo.list_reviews(&id).await?;
    let price_tiers = repo.list_price_tiers(&id).await?;

    Ok(Json(EventDetail {
        event: event.into(),
        gallery,
        schedule,
        reviews,
        price_tiers,
    }))
}

// =============================================================================
// Admin event management
// =============================================================================

/// List every event for the admin dashboard, newest created first.
///
/// GET /api/admin/events
pub async fn admin_list_events(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<BookingEvent>>, ApiError> {
    let events = EventRepository::new(state.pool.clone()).list_all().await?;

    Ok(Json(ListResponse::new(
        events.into_iter().map(BookingEvent::from).collect(),
    )))
}

/// Create an event.
///
/// POST /api/admin/events
///
/// Club events must reference an existing club; association events must not
/// reference one. The id is taken from the request when supplied, otherwise
/// generated.
pub async fn create_event(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<BookingEvent>), ApiError> {
    request.validate()?;
    request.validate_scope().map_err(|e| {
        ApiError::Validation(
            e.message
                .clone()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Invalid event scope".to_string()),
        )
    })?;

    if let Some(club_id) = request.club_id {
        ClubRepository::new(state.pool.clone())
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;
    }

    let id = match &request.id {
        Some(id) => id.clone(),
        None => generate_event_id(),
    };

    let event = EventRepository::new(state.pool.clone())
        .create(&id, &request, Some(user.user_id))
        .await?;

    info!(event_id = %event.id, title = %event.title, user_id = %user.user_id, "Event created");

    Ok((StatusCode::CREATED, Json(event.into())))
}

/// Partially update an event. Scope (club vs association) is fixed at
/// creation and not updatable.
///
/// PUT /api/admin/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<BookingEvent>, ApiError> {
    request.validate()?;

    let event = EventRepository::new(state.pool.clone())
        .update(&id, &request)
        .await?;

    info!(event_id = %id, user_id = %user.user_id, "Event updated");

    Ok(Json(event.into()))
}

/// Hard delete an event and its child rows.
///
/// DELETE /api/admin/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let deleted = EventRepository::new(state.pool.clone()).delete(&id).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Event not found".to_string()));
    }

    info!(event_id = %id, user_id = %user.user_id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Add a gallery image to an event.
///
/// POST /api/admin/events/:id/gallery
pub async fn add_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddGalleryImageRequest>,
) -> Result<(StatusCode, Json<EventGalleryImage>), ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    ensure_event_exists(&repo, &id).await?;

    let image = repo.add_gallery_image(&id, &request).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// Remove a gallery image.
///
/// DELETE /api/admin/events/:id/gallery/:image_id
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path((_, image_id)): Path<(String, i32)>,
) -> Result<StatusCode, ApiError> {
    let deleted = EventRepository::new(state.pool.clone())
        .delete_gallery_image(image_id)
        .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Gallery image not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Add an itinerary day to an event.
///
/// POST /api/admin/events/:id/schedule
pub async fn add_schedule_day(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddScheduleDayRequest>,
) -> Result<(StatusCode, Json<EventScheduleDay>), ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    ensure_event_exists(&repo, &id).await?;

    let day = repo.add_schedule_day(&id, &request).await?;
    Ok((StatusCode::CREATED, Json(day)))
}

/// Remove an itinerary day.
///
/// DELETE /api/admin/events/:id/schedule/:day_id
pub async fn delete_schedule_day(
    State(state): State<AppState>,
    Path((_, day_id)): Path<(String, i32)>,
) -> Result<StatusCode, ApiError> {
    let deleted = EventRepository::new(state.pool.clone())
        .delete_schedule_day(day_id)
        .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Schedule day not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Add a review to an event.
///
/// POST /api/admin/events/:id/reviews
pub async fn add_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddReviewRequest>,
) -> Result<(StatusCode, Json<EventReview>), ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    ensure_event_exists(&repo, &id).await?;

    let review = repo.add_review(&id, &request).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Remove a review.
///
/// DELETE /api/admin/events/:id/reviews/:review_id
pub async fn delete_review(
    State(state): State<AppState>,
    Path((_, review_id)): Path<(String, i32)>,
) -> Result<StatusCode, ApiError> {
    let deleted = EventRepository::new(state.pool.clone())
        .delete_review(review_id)
        .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Review not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Add a price tier to an event.
///
/// POST /api/admin/events/:id/prices
pub async fn add_price_tier(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddPriceTierRequest>,
) -> Result<(StatusCode, Json<EventPriceTier>), ApiError> {
    request.validate()?;

    let repo = EventRepository::new(state.pool.clone());
    ensure_event_exists(&repo, &id).await?;

    let tier = repo.add_price_tier(&id, &request).await?;
    Ok((StatusCode::CREATED, Json(tier)))
}

/// Remove a price tier.
///
/// DELETE /api/admin/events/:id/prices/:tier_id
pub async fn delete_price_tier(
    State(state): State<AppState>,
    Path((_, tier_id)): Path<(String, i32)>,
) -> Result<StatusCode, ApiError> {
    let deleted = EventRepository::new(state.pool.clone())
        .delete_price_tier(tier_id)
        .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Price tier not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_event_exists(repo: &EventRepository, id: &str) -> Result<(), ApiError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;
    Ok(())
}
