//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The HTTP layer is responsible for mapping
//! the public DTOs defined in the `shared` crate to these internal types.

pub mod reservations {
    use shared::{ReservationSubmission, ReservationValidationResponse};

    /// Raw form input for a reservation request, exactly as submitted.
    /// Dates are unparsed strings so that malformed input can be reported
    /// as a validation outcome instead of a fault.
    #[derive(Debug, Clone)]
    pub struct ReservationFormCommand {
        pub resource_id: String,
        pub requester_name: String,
        pub start: String,
        pub end: String,
        pub attendee_count: u32,
        pub notes: Option<String>,
    }

    /// Input for validating and submitting a reservation request.
    #[derive(Debug, Clone)]
    pub struct SubmitReservationCommand {
        pub form: ReservationFormCommand,
        pub submitted_by: String,
    }

    /// Result of a submission attempt. `submission` is present only when
    /// validation accepted the request; actually sending it to the remote
    /// API is the caller's responsibility.
    #[derive(Debug, Clone)]
    pub struct SubmitReservationOutcome {
        pub submission: Option<ReservationSubmission>,
        pub response: ReservationValidationResponse,
    }
}

pub mod balance {
    /// Query parameters for one year of month-bucketed balance history.
    #[derive(Debug, Clone)]
    pub struct MonthlyBalanceQuery {
        pub account_id: String,
        pub year: i32,
        /// Authoritative live balance fetched alongside the history
        pub current_balance: f64,
    }
}

pub mod transactions {
    use crate::domain::models::transaction::BalanceTransaction;

    /// Query parameters for a page of transactions, newest first.
    #[derive(Debug, Clone, Default)]
    pub struct TransactionPageQuery {
        /// Cursor - transaction ID to start after
        pub after: Option<String>,
        pub limit: Option<u32>,
    }

    /// Generic pagination info returned by list queries.
    #[derive(Debug, Clone)]
    pub struct PaginationInfo {
        pub has_more: bool,
        pub next_cursor: Option<String>,
    }

    /// Result of listing transactions.
    #[derive(Debug, Clone)]
    pub struct TransactionPageResult {
        pub transactions: Vec<BalanceTransaction>,
        pub pagination: PaginationInfo,
    }
}
