//! Domain models for the Journey backend.
//!
//! This crate defines the entities served by the REST API, the validated
//! request/response DTOs, and the pure domain logic that does not touch the
//! database (booking-reference generation, event identifiers, status enums).

pub mod models;
