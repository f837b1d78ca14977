//! Leave request status machine and submission validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a leave request. Transitions are one-way: a request starts
/// `Pending` and is decided exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }

    /// Whether a request in `self` may move to `next`. Only
    /// pending -> approved and pending -> rejected are legal.
    pub fn can_transition(&self, next: LeaveStatus) -> bool {
        matches!(
            (self, next),
            (LeaveStatus::Pending, LeaveStatus::Approved)
                | (LeaveStatus::Pending, LeaveStatus::Rejected)
        )
    }
}

/// Validate a leave submission: non-blank type and reason, from <= to.
pub fn validate_submission(
    leave_type: &str,
    from: NaiveDate,
    to: NaiveDate,
    reason: &str,
) -> Result<(), String> {
    if leave_type.trim().is_empty() {
        return Err("Leave type is required".to_string());
    }
    if reason.trim().is_empty() {
        return Err("Reason is required".to_string());
    }
    if from > to {
        return Err(format!("Leave period start {from} is after end {to}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn pending_may_be_approved_or_rejected() {
        assert!(LeaveStatus::Pending.can_transition(LeaveStatus::Approved));
        assert!(LeaveStatus::Pending.can_transition(LeaveStatus::Rejected));
    }

    #[test]
    fn decided_requests_are_terminal() {
        for decided in [LeaveStatus::Approved, LeaveStatus::Rejected] {
            assert!(!decided.can_transition(LeaveStatus::Approved));
            assert!(!decided.can_transition(LeaveStatus::Rejected));
            assert!(!decided.can_transition(LeaveStatus::Pending));
        }
    }

    #[test]
    fn pending_cannot_return_to_pending() {
        assert!(!LeaveStatus::Pending.can_transition(LeaveStatus::Pending));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
        ] {
            assert_eq!(LeaveStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_string_rejected() {
        assert_eq!(LeaveStatus::parse("cancelled"), None);
        assert_eq!(LeaveStatus::parse(""), None);
        assert_eq!(LeaveStatus::parse("Pending"), None);
    }

    #[test]
    fn valid_submission_accepted() {
        assert!(validate_submission(
            "vacation",
            date(2025, 5, 1),
            date(2025, 5, 3),
            "Family trip"
        )
        .is_ok());
    }

    #[test]
    fn single_day_leave_accepted() {
        assert!(validate_submission("sick", date(2025, 5, 1), date(2025, 5, 1), "Flu").is_ok());
    }

    #[test]
    fn reversed_period_rejected() {
        let result = validate_submission("vacation", date(2025, 5, 3), date(2025, 5, 1), "Trip");
        assert!(result.is_err());
    }

    #[test]
    fn blank_type_rejected() {
        assert!(validate_submission("  ", date(2025, 5, 1), date(2025, 5, 2), "Trip").is_err());
    }

    #[test]
    fn blank_reason_rejected() {
        assert!(validate_submission("vacation", date(2025, 5, 1), date(2025, 5, 2), "").is_err());
    }
}
