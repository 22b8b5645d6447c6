//! Club routes: listing, CRUD, and the membership state machine.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::club::{CreateClubRequest, MembershipStatus, UpdateClubRequest};
use domain::models::{BookingEvent, Club, ClubMembership, ListResponse};
use persistence::repositories::{ClubRepository, EventRepository};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::SessionUser;

/// List active clubs.
///
/// GET /api/clubs
pub async fn list_clubs(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Club>>, ApiError> {
    let clubs = ClubRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ListResponse::new(
        clubs.into_iter().map(Club::from).collect(),
    )))
}

/// Get a club by id.
///
/// GET /api/clubs/:id
pub async fn get_club(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Club>, ApiError> {
    let club = ClubRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    Ok(Json(club.into()))
}

/// Create a club. The creator becomes its owner.
///
/// POST /api/clubs
pub async fn create_club(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<CreateClubRequest>,
) -> Result<(StatusCode, Json<Club>), ApiError> {
    request.validate()?;

    let club = ClubRepository::new(state.pool.clone())
        .create(&request, Some(user.user_id))
        .await?;

    info!(club_id = %club.id, club_name = %club.name, user_id = %user.user_id, "Club created");

    Ok((StatusCode::CREATED, Json(club.into())))
}

/// Update a club. Only the owner or an admin may mutate it.
///
/// PUT /api/clubs/:id
pub async fn update_club(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateClubRequest>,
) -> Result<Json<Club>, ApiError> {
    request.validate()?;

    let repo = ClubRepository::new(state.pool.clone());

    let club = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    if club.owner_id != Some(user.user_id) && !user.is_admin {
        return Err(ApiError::Forbidden(
            "Only the club owner can update this club".to_string(),
        ));
    }

    let updated = repo.update(id, &request).await?;

    info!(club_id = %id, user_id = %user.user_id, "Club updated");

    Ok(Json(updated.into()))
}

/// Soft delete a club. Only the owner or an admin may delete it.
///
/// DELETE /api/clubs/:id
pub async fn delete_club(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());

    let club = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    if club.owner_id != Some(user.user_id) && !user.is_admin {
        return Err(ApiError::Forbidden(
            "Only the club owner can delete this club".to_string(),
        ));
    }

    repo.delete(id).await?;

    info!(club_id = %id, user_id = %user.user_id, "Club deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Join a club.
///
/// POST /api/clubs/:id/join
pub async fn join_club(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
) -> Result<Json<ClubMembership>, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());

    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    let membership = repo.join_club(user.user_id, id).await?;

    info!(club_id = %id, user_id = %user.user_id, "Joined club");

    Ok(Json(membership.into()))
}

/// Leave a club.
///
/// POST /api/clubs/:id/leave
pub async fn leave_club(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());

    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    repo.leave_club(user.user_id, id).await?;

    info!(club_id = %id, user_id = %user.user_id, "Left club");

    Ok(StatusCode::NO_CONTENT)
}

/// Check whether the current user is a member of a club.
///
/// GET /api/clubs/:id/membership
pub async fn membership_status(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<i32>,
) -> Result<Json<MembershipStatus>, ApiError> {
    let is_member = ClubRepository::new(state.pool.clone())
        .is_member(user.user_id, id)
        .await?;

    Ok(Json(MembershipStatus { is_member }))
}

/// List a club's active members.
///
/// GET /api/clubs/:id/members
pub async fn list_members(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ListResponse<ClubMembership>>, ApiError> {
    let repo = ClubRepository::new(state.pool.clone());

    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    let members = repo.list_club_members(id).await?;

    Ok(Json(ListResponse::new(
        members.into_iter().map(ClubMembership::from).collect(),
    )))
}

/// List the current user's active club memberships.
///
/// GET /api/user/clubs
pub async fn user_clubs(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<ListResponse<ClubMembership>>, ApiError> {
    let memberships = ClubRepository::new(state.pool.clone())
        .list_user_memberships(user.user_id)
        .await?;

    Ok(Json(ListResponse::new(
        memberships.into_iter().map(ClubMembership::from).collect(),
    )))
}

/// List a club's events, newest first.
///
/// GET /api/clubs/:id/events
pub async fn club_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ListResponse<BookingEvent>>, ApiError> {
    ClubRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    let events = EventRepository::new(state.pool.clone())
        .list_club_events(id)
        .await?;

    Ok(Json(ListResponse::new(
        events.into_iter().map(BookingEvent::from).collect(),
    )))
}

/// List a club's upcoming events, soonest first.
///
/// GET /api/clubs/:id/events/upcoming
pub async fn upcoming_club_events(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ListResponse<BookingEvent>>, ApiError> {
    ClubRepository::new(state.pool.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Club not found".to_string()))?;

    let events = EventRepository::new(state.pool.clone())
        .list_upcoming_club_events(id)
        .await?;

    Ok(Json(ListResponse::new(
        events.into_iter().map(BookingEvent::from).collect(),
    )))
}
