//! Entity definitions (database row mappings).
//!
//! Entities exist for the core aggregates whose row shape differs from the
//! API shape (credential hashes, session rows). CMS rows are served verbatim,
//! so their `FromRow` mapping lives directly on the domain model.

mod club;
mod event;
mod session;
mod ticket;
mod user;

pub use club::{ClubEntity, ClubMembershipEntity};
pub use event::BookingEventEntity;
pub use session::{SessionEntity, SessionWithUserEntity};
pub use ticket::BookingTicketEntity;
pub use user::UserEntity;
