//! Request extractors.

pub mod session;

pub use session::{OptionalSessionUser, SessionUser};
