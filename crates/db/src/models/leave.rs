//! Leave request model.

use chrono::NaiveDate;
use hrms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employee_leaves` table. `status` is one of
/// `pending`/`approved`/`rejected` (see `hrms_core::leave::LeaveStatus`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LeaveRequest {
    pub id: DbId,
    pub employee_id: DbId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: String,
    pub decided_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/users-add-leave`. Name, position, and
/// department are denormalized from the employee row server-side.
#[derive(Debug, Deserialize)]
pub struct SubmitLeaveRequest {
    pub employee_id: DbId,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
}

/// Fully-assembled insert row handed to the repository (display fields
/// denormalized from the employee row).
#[derive(Debug)]
pub struct NewLeaveRequest {
    pub employee_id: DbId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub leave_type: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
}
