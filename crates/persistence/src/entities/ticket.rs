//! Booking ticket entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{PaymentStatus, TicketStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the booking_tickets table.
#[derive(Debug, Clone, FromRow)]
pub struct BookingTicketEntity {
    pub id: i32,
    pub booking_reference: String,
    pub event_id: String,
    pub user_id: Option<Uuid>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub number_of_participants: i32,
    pub event_date: DateTime<Utc>,
    pub total_price: f64,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_id: Option<String>,
    pub special_requests: Option<String>,
    pub status: TicketStatus,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingTicketEntity> for domain::models::BookingTicket {
    fn from(entity: BookingTicketEntity) -> Self {
        Self {
            id: entity.id,
            booking_reference: entity.booking_reference,
            event_id: entity.event_id,
            user_id: entity.user_id,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            customer_phone: entity.customer_phone,
            number_of_participants: entity.number_of_participants,
            event_date: entity.event_date,
            total_price: entity.total_price,
            payment_status: entity.payment_status,
            payment_method: entity.payment_method,
            transaction_id: entity.transaction_id,
            special_requests: entity.special_requests,
            status: entity.status,
            confirmed_at: entity.confirmed_at,
            cancelled_at: entity.cancelled_at,
            cancellation_reason: entity.cancellation_reason,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
