use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Status of a room/lab reservation as tracked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// Submitted but not yet reviewed by an administrator
    Pending,
    /// Confirmed; blocks the time slot for other requests
    Approved,
    /// Declined by an administrator; does not block the slot
    Rejected,
}

/// A reservation record as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    /// Room or lab this reservation is for
    pub resource_id: String,
    pub requester_name: String,
    /// Start of the reserved window (RFC 3339, local wall-clock time)
    pub start: String,
    /// End of the reserved window (RFC 3339, local wall-clock time)
    pub end: String,
    pub status: ReservationStatus,
}

/// Form payload for requesting a new reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub resource_id: String,
    pub requester_name: String,
    /// Requested start (RFC 3339, local wall-clock time)
    pub start: String,
    /// Requested end (RFC 3339, local wall-clock time)
    pub end: String,
    pub attendee_count: u32,
    pub notes: Option<String>,
}

/// Outbound creation payload sent to the remote API once a request has
/// passed validation. Always carries `status = Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSubmission {
    pub id: String,
    pub resource_id: String,
    pub requester_name: String,
    pub start: String,
    pub end: String,
    pub attendee_count: u32,
    pub notes: Option<String>,
    pub status: ReservationStatus,
    /// Identifier of the signed-in user submitting the form
    pub submitted_by: String,
}

/// Result of validating a reservation request, shaped for the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationValidationResponse {
    pub accepted: bool,
    /// Machine-readable rejection code (e.g. "weekend_not_allowed")
    pub reason_code: Option<String>,
    /// User-facing explanation, present whenever `accepted` is false
    pub message: Option<String>,
}

/// Booking policy constants for a facility. Posted hours and duration
/// limits live here so they can change without touching the validation
/// algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPolicyConfig {
    /// Whether Saturday/Sunday reservations are accepted
    pub allow_weekends: bool,
    /// Earliest permitted time of day, "HH:MM"
    pub opening_time: String,
    /// Latest permitted time of day, "HH:MM" (inclusive)
    pub closing_time: String,
    pub min_duration_minutes: i64,
    pub max_duration_minutes: i64,
}

impl Default for BookingPolicyConfig {
    fn default() -> Self {
        Self {
            allow_weekends: false,
            opening_time: "06:00".to_string(),
            closing_time: "16:20".to_string(),
            min_duration_minutes: 30,
            max_duration_minutes: 8 * 60,
        }
    }
}

/// Type of balance transaction for rendering and business logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money added to the account
    Income,
    /// Money spent from the account
    Expense,
}

/// A single signed movement on a UDP budget account, as returned by the
/// remote API. Append-only history; never edited locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: String,
    /// UDP account this transaction belongs to
    pub account_id: String,
    /// Timestamp of the movement (RFC 3339, local wall-clock time)
    pub date: String,
    pub description: String,
    /// Positive for income, negative for expense
    pub amount: f64,
    /// Account balance after this transaction
    pub balance: f64,
    pub transaction_type: TransactionType,
}

/// One month of aggregated income/expense figures for the balance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    /// Calendar month, 1-12
    pub month: u32,
    /// Human-readable month name for chart labels
    pub label: String,
    pub income: f64,
    /// Non-negative; apportioned from the reconciled yearly total
    pub expenses: f64,
    pub net: f64,
}

/// Year of month-bucketed balance history for an account, reconciled
/// against the authoritative current balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBalanceSummary {
    pub account_id: String,
    pub year: i32,
    pub current_balance: f64,
    /// Always twelve entries, January through December
    pub months: Vec<MonthlyBucket>,
}

/// Request for one year of balance history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceHistoryRequest {
    pub account_id: String,
    pub year: i32,
}

impl Default for BalanceHistoryRequest {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            year: chrono::Local::now().year(),
        }
    }
}

/// Type of transaction amount for styling and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountType {
    Positive,
    Negative,
    Zero,
}

/// A transaction pre-formatted for the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedTransaction {
    pub id: String,
    pub formatted_date: String,
    pub description: String,
    pub formatted_amount: String,
    pub amount_type: AmountType,
    pub formatted_balance: String,
    pub raw_amount: f64,
    pub raw_balance: f64,
    pub raw_date: String,
}

/// Generic pagination info returned by list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// Request for a page of formatted transaction table data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionTableRequest {
    /// Cursor for pagination - transaction ID to start after
    pub after: Option<String>,
    /// Maximum number of rows to return
    pub limit: Option<u32>,
}

/// Response containing formatted transaction table data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTableResponse {
    pub formatted_transactions: Vec<FormattedTransaction>,
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_wire_shape_matches_api_contract() {
        let submission = ReservationSubmission {
            id: "res-1".to_string(),
            resource_id: "lab-2".to_string(),
            requester_name: "Prof. Rivas".to_string(),
            start: "2026-03-02T09:00:00".to_string(),
            end: "2026-03-02T11:00:00".to_string(),
            attendee_count: 24,
            notes: None,
            status: ReservationStatus::Pending,
            submitted_by: "u-77".to_string(),
        };

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["status"], "Pending");
        assert_eq!(json["submitted_by"], "u-77");
        assert_eq!(json["resource_id"], "lab-2");
    }

    #[test]
    fn default_policy_matches_posted_hours() {
        let policy = BookingPolicyConfig::default();
        assert!(!policy.allow_weekends);
        assert_eq!(policy.opening_time, "06:00");
        assert_eq!(policy.closing_time, "16:20");
        assert_eq!(policy.min_duration_minutes, 30);
        assert_eq!(policy.max_duration_minutes, 480);
    }

    #[test]
    fn balance_history_request_defaults_to_current_year() {
        let request = BalanceHistoryRequest::default();
        assert!(request.year >= 2025);
        assert!(request.account_id.is_empty());
    }
}
