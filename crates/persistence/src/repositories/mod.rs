//! Repository implementations.
//!
//! One repository per aggregate; all writes use `RETURNING` so inserts and
//! updates come back fully materialized in a single round trip.

mod club;
mod event;
mod focus_items;
mod media;
mod partners;
mod sections;
mod session;
mod settings;
mod site_stats;
mod team_members;
mod testimonials;
mod ticket;
mod user;

pub use club::ClubRepository;
pub use event::EventRepository;
pub use focus_items::FocusItemRepository;
pub use media::MediaAssetRepository;
pub use partners::PartnerRepository;
pub use sections::SectionRepository;
pub use session::SessionRepository;
pub use settings::SettingsRepository;
pub use site_stats::SiteStatRepository;
pub use team_members::TeamMemberRepository;
pub use testimonials::TestimonialRepository;
pub use ticket::TicketRepository;
pub use user::UserRepository;
