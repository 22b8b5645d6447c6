//! Application services: cookies, email dispatch, startup bootstrap.

pub mod bootstrap;
pub mod cookies;
pub mod email;
