//! Attendance ledger model.

use chrono::NaiveDate;
use hrms_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `attendances` table. A record is open while `clock_out`
/// is unset and terminal once closed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub employee_id: DbId,
    pub work_date: NaiveDate,
    pub clock_in: Timestamp,
    pub clock_out: Option<Timestamp>,
    pub clock_in_photo: String,
    pub clock_out_photo: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for opening an attendance record. Built by the clock-in handler
/// after the photo upload has been stored.
#[derive(Debug)]
pub struct CreateAttendance {
    pub employee_id: DbId,
    pub work_date: NaiveDate,
    pub clock_in: Timestamp,
    pub clock_in_photo: String,
}
