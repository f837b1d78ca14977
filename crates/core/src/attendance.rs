//! Attendance clock parsing and filter validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Wire format for clock timestamps, e.g. `2025-03-15 08:30:00`.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a clock-in/clock-out timestamp from its wire format.
///
/// Timestamps are interpreted as UTC. Returns a human-readable error for
/// anything that does not match [`CLOCK_FORMAT`].
pub fn parse_clock(value: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(value, CLOCK_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| format!("Timestamp '{value}' must match format YYYY-MM-DD HH:MM:SS"))
}

/// Parse a `YYYY-MM-DD` date query parameter.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Date '{value}' must match format YYYY-MM-DD"))
}

/// Validate an optional month/year history filter.
///
/// Both parts must be given together, month in 1..=12 and year a plausible
/// four-digit value.
pub fn validate_month_filter(month: Option<u32>, year: Option<i32>) -> Result<(), String> {
    match (month, year) {
        (None, None) => Ok(()),
        (Some(m), Some(y)) => {
            if !(1..=12).contains(&m) {
                return Err(format!("Month must be between 1 and 12, got {m}"));
            }
            if !(1900..=9999).contains(&y) {
                return Err(format!("Year '{y}' is out of range"));
            }
            Ok(())
        }
        _ => Err("Month and year filters must be provided together".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parse_clock_accepts_wire_format() {
        let ts = parse_clock("2025-03-15 08:30:00").unwrap();
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert_eq!(ts.hour(), 8);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn parse_clock_rejects_iso_t_separator() {
        assert!(parse_clock("2025-03-15T08:30:00").is_err());
    }

    #[test]
    fn parse_clock_rejects_date_only() {
        let result = parse_clock("2025-03-15");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("YYYY-MM-DD HH:MM:SS"));
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert!(parse_clock("not a timestamp").is_err());
    }

    #[test]
    fn parse_date_accepts_plain_date() {
        let d = parse_date("2025-12-01").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2025, 12, 1));
    }

    #[test]
    fn parse_date_rejects_slashes() {
        assert!(parse_date("2025/12/01").is_err());
    }

    #[test]
    fn month_filter_accepts_absent_pair() {
        assert!(validate_month_filter(None, None).is_ok());
    }

    #[test]
    fn month_filter_accepts_valid_pair() {
        assert!(validate_month_filter(Some(6), Some(2025)).is_ok());
    }

    #[test]
    fn month_filter_rejects_half_pair() {
        assert!(validate_month_filter(Some(6), None).is_err());
        assert!(validate_month_filter(None, Some(2025)).is_err());
    }

    #[test]
    fn month_filter_rejects_month_thirteen() {
        let result = validate_month_filter(Some(13), Some(2025));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("between 1 and 12"));
    }
}
