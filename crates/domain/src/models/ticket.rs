//! Booking ticket domain models and reference generation.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a booking ticket.
///
/// Tickets start `pending` and move exactly once to `confirmed` or
/// `cancelled`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Confirmed => "confirmed",
            TicketStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TicketStatus::Pending),
            "confirmed" => Ok(TicketStatus::Confirmed),
            "cancelled" => Ok(TicketStatus::Cancelled),
            _ => Err(format!("Invalid ticket status: {}", s)),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment status of a booking ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const REFERENCE_SUFFIX_LEN: usize = 6;
const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generates a booking reference of the form `BKG-<epoch-millis>-<XXXXXX>`.
///
/// Generated once at ticket creation and never regenerated. The timestamp
/// plus six random base36 characters is treated as unique in practice;
/// collisions are not re-checked.
pub fn generate_booking_reference() -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REFERENCE_SUFFIX_LEN)
        .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
        .collect();
    format!("BKG-{}-{}", millis, suffix)
}

/// A customer booking for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BookingTicket {
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

/// Request payload for creating a booking.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 255, message = "Event id is required"))]
    pub event_id: String,

    #[validate(length(min = 1, max = 255, message = "Customer name is required"))]
    pub customer_name: String,

    #[validate(email(message = "Invalid customer email"))]
    pub customer_email: String,

    #[validate(length(max = 50, message = "Phone must be at most 50 characters"))]
    pub customer_phone: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Participants must be between 1 and 100"))]
    pub number_of_participants: i32,

    pub event_date: DateTime<Utc>,

    #[validate(range(min = 0.0, message = "Total price must be non-negative"))]
    pub total_price: f64,

    #[validate(length(max = 50, message = "Payment method must be at most 50 characters"))]
    pub payment_method: Option<String>,

    pub special_requests: Option<String>,
}

/// Request payload for a booking status transition.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateBookingStatusRequest {
    pub status: TicketStatus,

    pub cancellation_reason: Option<String>,

    #[validate(length(max = 50, message = "Payment method must be at most 50 characters"))]
    pub payment_method: Option<String>,

    #[validate(length(max = 255, message = "Transaction id must be at most 255 characters"))]
    pub transaction_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_booking_reference_format() {
        let pattern = Regex::new(r"^BKG-\d+-[A-Z0-9]{6}$").unwrap();
        for _ in 0..100 {
            let reference = generate_booking_reference();
            assert!(pattern.is_match(&reference), "bad reference: {}", reference);
        }
    }

    #[test]
    fn test_booking_references_unique() {
        let a = generate_booking_reference();
        let b = generate_booking_reference();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ticket_status_roundtrip() {
        for status in [
            TicketStatus::Pending,
            TicketStatus::Confirmed,
            TicketStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_ticket_status_rejects_unknown() {
        assert!("refunded".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_create_booking_request_valid() {
        let request = CreateBookingRequest {
            event_id: "1718800000000-k3x9qa".to_string(),
            customer_name: "Amina B".to_string(),
            customer_email: "amina@example.com".to_string(),
            customer_phone: None,
            number_of_participants: 2,
            event_date: Utc::now(),
            total_price: 100.0,
            payment_method: Some("card".to_string()),
            special_requests: None,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_booking_request_rejects_zero_participants() {
        let request = CreateBookingRequest {
            event_id: "evt".to_string(),
            customer_name: "Amina B".to_string(),
            customer_email: "amina@example.com".to_string(),
            customer_phone: None,
            number_of_participants: 0,
            event_date: Utc::now(),
            total_price: 100.0,
            payment_method: None,
            special_requests: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_status_enum_serialization() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        assert_eq!(
            serde_json::from_str::<TicketStatus>("\"cancelled\"").unwrap(),
            TicketStatus::Cancelled
        );
    }
}
