//! # Campus Portal Backend
//!
//! Domain core of the school-administration portal: booking validation for
//! room/lab reservations and balance aggregation for UDP budget accounts.
//! The HTTP layer that fetches reservations and transaction history, and
//! the components that render the results, live elsewhere; this crate only
//! computes.

use anyhow::Result;
use shared::BookingPolicyConfig;

pub mod domain;

pub use domain::booking_service::{BookingService, BookingValidation, RejectionReason};

/// Main backend struct that bundles all domain services
#[derive(Debug, Clone)]
pub struct Backend {
    pub booking_service: domain::BookingService,
    pub balance_service: domain::BalanceService,
    pub calendar_service: domain::CalendarService,
    pub transaction_table_service: domain::TransactionTableService,
}

impl Backend {
    /// Create a backend with the facility's default posted policy.
    pub fn new() -> Self {
        Self {
            booking_service: domain::BookingService::new(),
            balance_service: domain::BalanceService::new(),
            calendar_service: domain::CalendarService::new(),
            transaction_table_service: domain::TransactionTableService::new(),
        }
    }

    /// Create a backend with a custom booking policy, e.g. for facilities
    /// with different posted hours.
    pub fn with_booking_config(config: &BookingPolicyConfig) -> Result<Self> {
        Ok(Self {
            booking_service: domain::BookingService::with_config(config)?,
            balance_service: domain::BalanceService::new(),
            calendar_service: domain::CalendarService::new(),
            transaction_table_service: domain::TransactionTableService::new(),
        })
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_wires_all_services() {
        let backend = Backend::new();
        assert_eq!(backend.calendar_service.month_name(1), "January");
        assert!(!backend.booking_service.policy().allow_weekends);
    }

    #[test]
    fn backend_rejects_invalid_booking_config() {
        let mut config = BookingPolicyConfig::default();
        config.opening_time = "later".to_string();
        assert!(Backend::with_booking_config(&config).is_err());
    }
}
