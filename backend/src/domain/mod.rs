//! # Domain Module
//!
//! Contains all business logic for the facility portal core.
//!
//! This module encapsulates the business rules, entities, and services that
//! define how room/lab reservations are validated and how UDP balance
//! history is aggregated. It operates independently of any UI framework,
//! HTTP client, or storage mechanism: every service receives its full
//! input as parameters and returns a result with no hidden state.
//!
//! ## Module Organization
//!
//! - **booking_service**: Reservation request validation and submission payloads
//! - **balance_service**: Monthly income/expense aggregation and reconciliation
//! - **calendar**: Date calculations shared across the domain
//! - **transaction_table**: Transaction formatting and cursor pagination
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each service has a focused purpose
//! - **Testability**: Pure functions and clear interfaces for easy testing
//! - **UI Agnostic**: Business logic separate from presentation concerns
//! - **Configuration Driven**: Policy constants are named values, not literals

pub mod balance_service;
pub mod booking_service;
pub mod calendar;
pub mod commands;
pub mod error;
pub mod models;
pub mod transaction_table;

pub use balance_service::*;
pub use booking_service::*;
pub use calendar::*;
pub use error::*;
pub use transaction_table::*;
