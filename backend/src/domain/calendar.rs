//! Calendar domain logic for the facility portal.
//!
//! Date calculations shared by booking validation, balance aggregation and
//! the dashboard table live here. The UI only handles presentation
//! concerns; all calendar computations are handled in this module.

use crate::domain::error::DomainError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Calendar service that handles all date-related business logic
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            // chrono's weekday(): Monday = 1, ..., Sunday = 7
            // Our format: Sunday = 0, Monday = 1, ..., Saturday = 6
            date.weekday().num_days_from_sunday()
        } else {
            0
        }
    }

    /// First and last calendar day of a month.
    pub fn month_bounds(&self, month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(DomainError::InvalidDate { month, year })?;
        let last = NaiveDate::from_ymd_opt(year, month, self.days_in_month(month, year))
            .ok_or(DomainError::InvalidDate { month, year })?;
        Ok((first, last))
    }

    /// True for Saturday and Sunday, computed from the local calendar date.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: i32) -> (u32, i32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Parse a form-submitted date-time string. Accepts RFC 3339 with an
    /// offset (offset discarded, wall-clock kept) and the offset-less
    /// variants browsers emit for `datetime-local` inputs.
    pub fn parse_datetime(&self, input: &str) -> Result<NaiveDateTime, DomainError> {
        let trimmed = input.trim();
        if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(trimmed) {
            return Ok(with_offset.naive_local());
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(parsed);
            }
        }
        Err(DomainError::MalformedDate(trimmed.to_string()))
    }

    /// Parse a time-of-day string as posted on facility schedules ("HH:MM").
    pub fn parse_time(&self, input: &str) -> Result<NaiveTime, DomainError> {
        NaiveTime::parse_from_str(input.trim(), "%H:%M")
            .map_err(|_| DomainError::MalformedDate(input.trim().to_string()))
    }

    /// Format a date for human-readable display
    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!("{} {}, {}", self.month_name(date.month()), date.day(), date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(1, 2025), 31); // January
        assert_eq!(service.days_in_month(4, 2025), 30); // April
        assert_eq!(service.days_in_month(2, 2025), 28); // February (non-leap)
        assert_eq!(service.days_in_month(2, 2024), 29); // February (leap year)
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::new();

        assert!(!service.is_leap_year(2025)); // Regular year
        assert!(service.is_leap_year(2024)); // Divisible by 4
        assert!(!service.is_leap_year(1900)); // Divisible by 100 but not 400
        assert!(service.is_leap_year(2000)); // Divisible by 400
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::new();

        assert_eq!(service.month_name(1), "January");
        assert_eq!(service.month_name(6), "June");
        assert_eq!(service.month_name(12), "December");
        assert_eq!(service.month_name(13), "Invalid Month");
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::new();

        assert_eq!(service.previous_month(6, 2025), (5, 2025));
        assert_eq!(service.previous_month(1, 2025), (12, 2024));

        assert_eq!(service.next_month(6, 2025), (7, 2025));
        assert_eq!(service.next_month(12, 2025), (1, 2026));
    }

    #[test]
    fn test_month_bounds() {
        let service = CalendarService::new();

        let (first, last) = service.month_bounds(2, 2024).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert_eq!(service.month_bounds(13, 2024), Err(DomainError::InvalidMonth(13)));
        assert_eq!(service.month_bounds(0, 2024), Err(DomainError::InvalidMonth(0)));
    }

    #[test]
    fn test_is_weekend() {
        let service = CalendarService::new();

        // 2026-03-07 is a Saturday, 2026-03-08 a Sunday, 2026-03-09 a Monday
        assert!(service.is_weekend(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()));
        assert!(service.is_weekend(NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()));
        assert!(!service.is_weekend(NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()));
    }

    #[test]
    fn test_parse_datetime_accepted_forms() {
        let service = CalendarService::new();

        let expected = NaiveDate::from_ymd_opt(2025, 6, 13)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        assert_eq!(service.parse_datetime("2025-06-13T09:00:00-04:00").unwrap(), expected);
        assert_eq!(service.parse_datetime("2025-06-13T09:00:00").unwrap(), expected);
        assert_eq!(service.parse_datetime("2025-06-13T09:00").unwrap(), expected);
        assert_eq!(service.parse_datetime("2025-06-13 09:00").unwrap(), expected);

        assert!(matches!(
            service.parse_datetime("invalid-date"),
            Err(DomainError::MalformedDate(_))
        ));
    }

    #[test]
    fn test_parse_time() {
        let service = CalendarService::new();

        assert_eq!(
            service.parse_time("16:20").unwrap(),
            NaiveTime::from_hms_opt(16, 20, 0).unwrap()
        );
        assert!(service.parse_time("25:00").is_err());
        assert!(service.parse_time("noon").is_err());
    }

    #[test]
    fn test_format_date_for_display() {
        let service = CalendarService::new();

        assert_eq!(
            service.format_date_for_display(NaiveDate::from_ymd_opt(2025, 6, 13).unwrap()),
            "June 13, 2025"
        );
    }
}
