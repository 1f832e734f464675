//! Domain model for a room/lab reservation.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
}

/// An existing reservation, owned and persisted by the remote backend.
/// Read-only input to validation; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub resource_id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: ReservationStatus,
}

/// A proposed reservation window, built at form submission and discarded
/// once the validation result has been produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub resource_id: String,
    pub requester_name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub attendee_count: u32,
    pub notes: Option<String>,
}

impl Reservation {
    /// True when this reservation blocks its time slot for other requests.
    pub fn blocks_slot(&self) -> bool {
        self.status == ReservationStatus::Approved
    }
}
