//! Domain model definitions.

pub mod club;
pub mod event;
pub mod landing;
pub mod media;
pub mod settings;
pub mod ticket;
pub mod user;

pub use club::{Club, ClubMembership, ClubRole};
pub use event::{BookingEvent, EventStatus};
pub use landing::{
    FocusItem, LandingSection, LandingTestimonial, Partner, SectionBlock, SiteStat, TeamMember,
};
pub use media::MediaAsset;
pub use ticket::{BookingTicket, PaymentStatus, TicketStatus};
pub use user::User;

use serde::Serialize;

/// Standard envelope for list endpoints: `{ "data": [...], "count": N }`.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_counts_items() {
        let response = ListResponse::new(vec![1, 2, 3]);
        assert_eq!(response.count, 3);
        assert_eq!(response.data, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_response_empty() {
        let response: ListResponse<String> = ListResponse::new(vec![]);
        assert_eq!(response.count, 0);
    }

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec!["a", "b"]);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"data":["a","b"],"count":2}"#);
    }
}
