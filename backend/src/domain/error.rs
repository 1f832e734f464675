//! Typed errors for caller mistakes in domain queries.
//!
//! These are programming or query errors, not user-correctable input;
//! user-facing validation outcomes are modeled as values
//! (`BookingValidation` / `RejectionReason`) instead.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Invalid date: {month}/{year}")]
    InvalidDate { month: u32, year: i32 },
    #[error("Unparseable date/time: {0}")]
    MalformedDate(String),
}
