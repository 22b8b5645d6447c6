//! Booking routes: ticket creation, lookup, and the admin status transition
//! with its best-effort email side effect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::settings::{BookingPageSettings, UpdateBookingPageSettingsRequest};
use domain::models::ticket::{
    generate_booking_reference, CreateBookingRequest, UpdateBookingStatusRequest,
};
use domain::models::{BookingTicket, ListResponse};
use persistence::entities::BookingTicketEntity;
use persistence::repositories::{EventRepository, SettingsRepository, TicketRepository};
use tracing::{error, info};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{OptionalSessionUser, SessionUser};
use crate::services::email::BookingEmailData;

/// Create a booking ticket.
///
/// POST /api/bookings
///
/// Open to anonymous visitors; a logged-in session associates the ticket with
/// the user. The booking reference is generated server-side exactly once.
pub async fn create_booking(
    State(state): State<AppState>,
    OptionalSessionUser(session): OptionalSessionUser,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingTicket>), ApiError> {
    request.validate()?;

    let events = EventRepository::new(state.pool.clone());
    let event = events
        .find_by_id(&request.event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))?;

    let reference = generate_booking_reference();

    let ticket = TicketRepository::new(state.pool.clone())
        .create(&reference, &request, session.map(|s| s.user_id))
        .await?;

    info!(
        booking_reference = %ticket.booking_reference,
        event_id = %ticket.event_id,
        participants = ticket.number_of_participants,
        "Booking created"
    );

    // Best-effort notification; the persisted ticket is the source of truth
    dispatch_status_email(&state, &ticket, event.title.clone(), Some(event.location)).await;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

/// Look up a booking by its reference.
///
/// GET /api/bookings/:reference
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<BookingTicket>, ApiError> {
    let ticket = TicketRepository::new(state.pool.clone())
        .find_by_reference(&reference)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    Ok(Json(ticket.into()))
}

/// List all bookings, newest first.
///
/// GET /api/admin/bookings
pub async fn admin_list_bookings(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<BookingTicket>>, ApiError> {
    let tickets = TicketRepository::new(state.pool.clone()).list().await?;

    Ok(Json(ListResponse::new(
        tickets.into_iter().map(BookingTicket::from).collect(),
    )))
}

/// Transition a booking's status.
///
/// PUT /api/admin/bookings/:reference/status
///
/// An unknown reference is an error and writes nothing. Confirming stamps the
/// confirmation time and completes the payment; cancelling stamps the
/// cancellation time and records a reason when given. The status email is
/// sent after the write commits and never affects the transition.
pub async fn update_booking_status(
    State(state): State<AppState>,
    user: SessionUser,
    Path(reference): Path<String>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingTicket>, ApiError> {
    request.validate()?;

    let ticket = TicketRepository::new(state.pool.clone())
        .update_status(&reference, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".to_string()))?;

    info!(
        booking_reference = %reference,
        status = %ticket.status,
        user_id = %user.user_id,
        "Booking status updated"
    );

    let (event_title, event_location) = match EventRepository::new(state.pool.clone())
        .find_by_id(&ticket.event_id)
        .await
    {
        Ok(Some(event)) => (event.title, Some(event.location)),
        _ => (ticket.event_id.clone(), None),
    };

    dispatch_status_email(&state, &ticket, event_title, event_location).await;

    Ok(Json(ticket.into()))
}

/// Public booking page settings (defaults when never written).
///
/// GET /api/booking/settings
pub async fn get_booking_settings(
    State(state): State<AppState>,
) -> Result<Json<BookingPageSettings>, ApiError> {
    let settings = SettingsRepository::new(state.pool.clone())
        .get_booking_page()
        .await?
        .unwrap_or_else(BookingPageSettings::default_record);

    Ok(Json(settings))
}

/// Update the booking page settings.
///
/// PUT /api/admin/booking/settings
pub async fn update_booking_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateBookingPageSettingsRequest>,
) -> Result<Json<BookingPageSettings>, ApiError> {
    request.validate()?;

    let settings = SettingsRepository::new(state.pool.clone())
        .upsert_booking_page(&request)
        .await?;

    Ok(Json(settings))
}

/// Send the status email for a ticket. Failures are logged and swallowed:
/// the booking transition has already committed and is never rolled back or
/// retried over mail problems.
async fn dispatch_status_email(
    state: &AppState,
    ticket: &BookingTicketEntity,
    event_title: String,
    event_location: Option<String>,
) {
    let data = BookingEmailData {
        customer_name: ticket.customer_name.clone(),
        customer_email: ticket.customer_email.clone(),
        booking_reference: ticket.booking_reference.clone(),
        event_title,
        event_location,
        event_date: ticket.event_date,
        number_of_participants: ticket.number_of_participants,
        total_price: ticket.total_price,
        payment_method: ticket.payment_method.clone(),
        status: ticket.status,
    };

    if let Err(e) = state.email.send_booking_status_email(&data).await {
        error!(
            booking_reference = %ticket.booking_reference,
            error = %e,
            "Failed to send booking status email"
        );
    }
}
