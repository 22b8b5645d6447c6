//! HTTP middleware: logging, request tracing, metrics and admin gating.

pub mod auth;
pub mod logging;
pub mod metrics;
pub mod trace_id;

pub use auth::require_admin;
pub use metrics::{metrics_handler, metrics_middleware};
pub use trace_id::trace_id;
