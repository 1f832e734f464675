//! Booking validation domain logic for the facility portal.
//!
//! All business rules for room/lab reservation requests live here, hoisted
//! out of the form handlers into one pure, independently testable service.
//! The UI only handles presentation concerns; it hands the submitted window
//! plus the already-fetched reservations to this service and renders the
//! outcome.

use crate::domain::calendar::CalendarService;
use crate::domain::commands::reservations::{
    ReservationFormCommand, SubmitReservationCommand, SubmitReservationOutcome,
};
use crate::domain::models::reservation::{Reservation, ReservationRequest, ReservationStatus};
use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use log::{debug, info};
use shared::{BookingPolicyConfig, ReservationSubmission, ReservationValidationResponse};
use uuid::Uuid;

/// Why a reservation request was turned down. Expected and
/// user-correctable; the collaborator's network failures are not modeled
/// here.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    WeekendNotAllowed,
    StartInPast,
    EndNotAfterStart,
    DurationTooShort,
    DurationTooLong,
    OutsideOperatingHours,
    SlotOverlap,
    /// Unparseable form input (dates that are not dates, etc.)
    MalformedInput(String),
}

impl RejectionReason {
    /// Stable machine-readable code for the UI layer.
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::WeekendNotAllowed => "weekend_not_allowed",
            RejectionReason::StartInPast => "start_in_past",
            RejectionReason::EndNotAfterStart => "end_not_after_start",
            RejectionReason::DurationTooShort => "duration_too_short",
            RejectionReason::DurationTooLong => "duration_too_long",
            RejectionReason::OutsideOperatingHours => "outside_operating_hours",
            RejectionReason::SlotOverlap => "slot_overlap",
            RejectionReason::MalformedInput(_) => "malformed_input",
        }
    }
}

/// Outcome of validating one reservation request.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingValidation {
    Accepted,
    Rejected(RejectionReason),
}

impl BookingValidation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BookingValidation::Accepted)
    }

    pub fn reason(&self) -> Option<&RejectionReason> {
        match self {
            BookingValidation::Accepted => None,
            BookingValidation::Rejected(reason) => Some(reason),
        }
    }
}

/// Parsed booking policy. Weekday-only scheduling, posted operating hours
/// and duration limits are policy constants, not part of the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPolicy {
    pub allow_weekends: bool,
    pub opening_time: NaiveTime,
    /// Latest permitted time of day, inclusive
    pub closing_time: NaiveTime,
    pub min_duration: Duration,
    pub max_duration: Duration,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            allow_weekends: false,
            opening_time: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            closing_time: NaiveTime::from_hms_opt(16, 20, 0).unwrap(),
            min_duration: Duration::minutes(30),
            max_duration: Duration::hours(8),
        }
    }
}

impl BookingPolicy {
    /// Parse a policy out of its serialized configuration.
    pub fn from_config(config: &BookingPolicyConfig) -> Result<Self> {
        let calendar = CalendarService::new();
        let opening_time = calendar
            .parse_time(&config.opening_time)
            .map_err(|e| anyhow!("Invalid opening time: {}", e))?;
        let closing_time = calendar
            .parse_time(&config.closing_time)
            .map_err(|e| anyhow!("Invalid closing time: {}", e))?;
        if opening_time >= closing_time {
            return Err(anyhow!("Opening time must be before closing time"));
        }
        if config.min_duration_minutes <= 0 || config.min_duration_minutes > config.max_duration_minutes {
            return Err(anyhow!(
                "Invalid duration limits: min {} / max {} minutes",
                config.min_duration_minutes,
                config.max_duration_minutes
            ));
        }
        Ok(Self {
            allow_weekends: config.allow_weekends,
            opening_time,
            closing_time,
            min_duration: Duration::minutes(config.min_duration_minutes),
            max_duration: Duration::minutes(config.max_duration_minutes),
        })
    }
}

/// Booking service that handles all reservation validation business logic
#[derive(Debug, Clone)]
pub struct BookingService {
    policy: BookingPolicy,
    calendar: CalendarService,
}

impl BookingService {
    /// Create a new BookingService with the facility's posted policy
    pub fn new() -> Self {
        Self {
            policy: BookingPolicy::default(),
            calendar: CalendarService::new(),
        }
    }

    /// Create a new BookingService with custom policy configuration
    pub fn with_config(config: &BookingPolicyConfig) -> Result<Self> {
        Ok(Self {
            policy: BookingPolicy::from_config(config)?,
            calendar: CalendarService::new(),
        })
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Validate a proposed reservation window against the policy and the
    /// already-approved reservations for the same resource.
    ///
    /// Checks are applied in order and the first failing check wins. Pure:
    /// no side effects, identical inputs always produce identical results.
    pub fn validate(
        &self,
        request: &ReservationRequest,
        existing: &[Reservation],
        now: NaiveDateTime,
    ) -> BookingValidation {
        if !self.policy.allow_weekends && self.calendar.is_weekend(request.start.date()) {
            debug!("Booking rejected: {} starts on a weekend", request.resource_id);
            return BookingValidation::Rejected(RejectionReason::WeekendNotAllowed);
        }

        if request.start < now {
            debug!("Booking rejected: start {} is in the past", request.start);
            return BookingValidation::Rejected(RejectionReason::StartInPast);
        }

        if request.start >= request.end {
            return BookingValidation::Rejected(RejectionReason::EndNotAfterStart);
        }

        let duration = request.end - request.start;
        if duration < self.policy.min_duration {
            return BookingValidation::Rejected(RejectionReason::DurationTooShort);
        }
        if duration > self.policy.max_duration {
            return BookingValidation::Rejected(RejectionReason::DurationTooLong);
        }

        if !self.within_operating_hours(request.start.time())
            || !self.within_operating_hours(request.end.time())
        {
            return BookingValidation::Rejected(RejectionReason::OutsideOperatingHours);
        }

        let conflict = existing.iter().any(|reservation| {
            reservation.resource_id == request.resource_id
                && reservation.blocks_slot()
                && Self::overlaps(reservation, request)
        });
        if conflict {
            debug!(
                "Booking rejected: {} overlaps an approved reservation",
                request.resource_id
            );
            return BookingValidation::Rejected(RejectionReason::SlotOverlap);
        }

        BookingValidation::Accepted
    }

    /// Validate raw form input. Unparseable dates become a
    /// `MalformedInput` rejection so the UI always has a message to render.
    pub fn validate_form(
        &self,
        command: &ReservationFormCommand,
        existing: &[Reservation],
        now: NaiveDateTime,
    ) -> BookingValidation {
        match self.parse_request(command) {
            Ok(request) => self.validate(&request, existing, now),
            Err(reason) => BookingValidation::Rejected(reason),
        }
    }

    /// Parse form strings into a reservation request.
    pub fn parse_request(
        &self,
        command: &ReservationFormCommand,
    ) -> Result<ReservationRequest, RejectionReason> {
        let start = self
            .calendar
            .parse_datetime(&command.start)
            .map_err(|e| RejectionReason::MalformedInput(e.to_string()))?;
        let end = self
            .calendar
            .parse_datetime(&command.end)
            .map_err(|e| RejectionReason::MalformedInput(e.to_string()))?;
        Ok(ReservationRequest {
            resource_id: command.resource_id.clone(),
            requester_name: command.requester_name.clone(),
            start,
            end,
            attendee_count: command.attendee_count,
            notes: command.notes.clone(),
        })
    }

    /// Validate a submission and, when accepted, build the outbound
    /// creation payload for the remote API. Sending it (and any retries)
    /// is the caller's responsibility.
    pub fn submit(
        &self,
        command: SubmitReservationCommand,
        existing: &[Reservation],
        now: NaiveDateTime,
    ) -> SubmitReservationOutcome {
        let request = match self.parse_request(&command.form) {
            Ok(request) => request,
            Err(reason) => {
                let validation = BookingValidation::Rejected(reason);
                return SubmitReservationOutcome {
                    submission: None,
                    response: self.to_response(&validation),
                };
            }
        };

        let validation = self.validate(&request, existing, now);
        let submission = if validation.is_accepted() {
            let payload = self.build_submission(&request, &command.submitted_by);
            info!(
                "Reservation {} for {} accepted, ready for submission",
                payload.id, payload.resource_id
            );
            Some(payload)
        } else {
            None
        };

        SubmitReservationOutcome {
            submission,
            response: self.to_response(&validation),
        }
    }

    /// Build the creation payload for an accepted request. Always carries
    /// `status = Pending`; approval happens on the backend.
    pub fn build_submission(
        &self,
        request: &ReservationRequest,
        submitted_by: &str,
    ) -> ReservationSubmission {
        ReservationSubmission {
            id: Uuid::new_v4().to_string(),
            resource_id: request.resource_id.clone(),
            requester_name: request.requester_name.clone(),
            start: request.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end: request.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
            attendee_count: request.attendee_count,
            notes: request.notes.clone(),
            status: shared::ReservationStatus::Pending,
            submitted_by: submitted_by.to_string(),
        }
    }

    /// Map a validation outcome to the DTO the UI renders.
    pub fn to_response(&self, validation: &BookingValidation) -> ReservationValidationResponse {
        match validation {
            BookingValidation::Accepted => ReservationValidationResponse {
                accepted: true,
                reason_code: None,
                message: None,
            },
            BookingValidation::Rejected(reason) => ReservationValidationResponse {
                accepted: false,
                reason_code: Some(reason.code().to_string()),
                message: Some(self.rejection_message(reason)),
            },
        }
    }

    /// Get user-friendly message for a rejection reason
    pub fn rejection_message(&self, reason: &RejectionReason) -> String {
        match reason {
            RejectionReason::WeekendNotAllowed => {
                "Reservations are only available Monday through Friday".to_string()
            }
            RejectionReason::StartInPast => {
                "The start date and time must not be in the past".to_string()
            }
            RejectionReason::EndNotAfterStart => {
                "The end time must be after the start time".to_string()
            }
            RejectionReason::DurationTooShort => format!(
                "Reservations must last at least {} minutes",
                self.policy.min_duration.num_minutes()
            ),
            RejectionReason::DurationTooLong => format!(
                "Reservations must not exceed {} minutes",
                self.policy.max_duration.num_minutes()
            ),
            RejectionReason::OutsideOperatingHours => format!(
                "Reservations must fall within facility hours, {} to {}",
                self.policy.opening_time.format("%H:%M"),
                self.policy.closing_time.format("%H:%M")
            ),
            RejectionReason::SlotOverlap => {
                "The requested time slot overlaps an approved reservation".to_string()
            }
            RejectionReason::MalformedInput(detail) => {
                format!("Please enter a valid date and time: {}", detail)
            }
        }
    }

    fn within_operating_hours(&self, time: NaiveTime) -> bool {
        time >= self.policy.opening_time && time <= self.policy.closing_time
    }

    /// Half-open interval overlap on the same resource.
    fn overlaps(reservation: &Reservation, request: &ReservationRequest) -> bool {
        reservation.start < request.end && reservation.end > request.start
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new()
    }
}
