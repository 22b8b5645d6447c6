//! Booking ticket repository for database operations.

use domain::models::ticket::{CreateBookingRequest, TicketStatus, UpdateBookingStatusRequest};
use domain::models::PaymentStatus;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BookingTicketEntity;
use crate::metrics::QueryTimer;

const TICKET_COLUMNS: &str = "id, booking_reference, event_id, user_id, customer_name, customer_email, \
     customer_phone, number_of_participants, event_date, total_price, payment_status, \
     payment_method, transaction_id, special_requests, status, confirmed_at, cancelled_at, \
     cancellation_reason, created_at, updated_at";

/// Repository for booking ticket database operations.
#[derive(Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Creates a new TicketRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a ticket with a server-generated reference; status starts
    /// `pending`.
    pub async fn create(
        &self,
        booking_reference: &str,
        request: &CreateBookingRequest,
        user_id: Option<Uuid>,
    ) -> Result<BookingTicketEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_booking_ticket");
        let result = sqlx::query_as::<_, BookingTicketEntity>(&format!(
            r#"
            INSERT INTO booking_tickets (booking_reference, event_id, user_id, customer_name,
                customer_email, customer_phone, number_of_participants, event_date, total_price,
                payment_method, special_requests)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(booking_reference)
        .bind(&request.event_id)
        .bind(user_id)
        .bind(&request.customer_name)
        .bind(&request.customer_email)
        .bind(&request.customer_phone)
        .bind(request.number_of_participants)
        .bind(request.event_date)
        .bind(request.total_price)
        .bind(&request.payment_method)
        .bind(&request.special_requests)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a ticket by its booking reference.
    pub async fn find_by_reference(
        &self,
        booking_reference: &str,
    ) -> Result<Option<BookingTicketEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_ticket_by_reference");
        let result = sqlx::query_as::<_, BookingTicketEntity>(&format!(
            "SELECT {TICKET_COLUMNS} FROM booking_tickets WHERE booking_reference = $1"
        ))
        .bind(booking_reference)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all tickets, newest first (admin view).
    pub async fn list(&self) -> Result<Vec<BookingTicketEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_booking_tickets");
        let result = sqlx::query_as::<_, BookingTicketEntity>(&format!(
            "SELECT {TICKET_COLUMNS} FROM booking_tickets ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Transition a ticket identified by its reference.
    ///
    /// Returns `Ok(None)` without writing anything when the reference does
    /// not exist; callers must surface that as an error. Confirming stamps
    /// `confirmed_at` and forces the payment to `completed`; cancelling
    /// stamps `cancelled_at` and keeps the stored reason unless a new one is
    /// supplied. Payment method and transaction id persist regardless of the
    /// target status. The booking reference itself is never rewritten.
    pub async fn update_status(
        &self,
        booking_reference: &str,
        request: &UpdateBookingStatusRequest,
    ) -> Result<Option<BookingTicketEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_ticket_status");

        let confirming = request.status == TicketStatus::Confirmed;
        let cancelling = request.status == TicketStatus::Cancelled;

        let result = sqlx::query_as::<_, BookingTicketEntity>(&format!(
            r#"
            UPDATE booking_tickets
            SET
                status = $2,
                confirmed_at = CASE WHEN $3 THEN NOW() ELSE confirmed_at END,
                payment_status = CASE WHEN $3 THEN $4 ELSE payment_status END,
                cancelled_at = CASE WHEN $5 THEN NOW() ELSE cancelled_at END,
                cancellation_reason = CASE WHEN $5 THEN COALESCE($6, cancellation_reason)
                                           ELSE cancellation_reason END,
                payment_method = COALESCE($7, payment_method),
                transaction_id = COALESCE($8, transaction_id),
                updated_at = NOW()
            WHERE booking_reference = $1
            RETURNING {TICKET_COLUMNS}
            "#
        ))
        .bind(booking_reference)
        .bind(request.status)
        .bind(confirming)
        .bind(PaymentStatus::Completed)
        .bind(cancelling)
        .bind(&request.cancellation_reason)
        .bind(&request.payment_method)
        .bind(&request.transaction_id)
        .fetch_optional(&self.pool)
        .await;

        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: TicketRepository tests require a database connection and are
    // covered by the integration tests in crates/api/tests.
}
