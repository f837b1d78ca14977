//! Payroll entry model. All money fields are fixed-point centavos.

use chrono::NaiveDate;
use hrms_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payrolls` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PayrollEntry {
    pub id: DbId,
    pub employee_id: DbId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    pub salary: Money,
    pub days_worked: i64,
    pub overtime: Money,
    pub gross_pay: Money,
    pub sss: Money,
    pub pag_ibig: Money,
    pub phil_health: Money,
    pub total_deductions: Money,
    pub net_pay: Money,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/payroll`. Days worked and all derived
/// figures are computed server-side from the attendance ledger and the
/// employee's compensation baseline.
#[derive(Debug, Deserialize)]
pub struct CreatePayrollRequest {
    pub employee_id: DbId,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    #[serde(default)]
    pub overtime: Money,
    #[serde(default)]
    pub sss: Option<Money>,
    #[serde(default)]
    pub pag_ibig: Option<Money>,
    #[serde(default)]
    pub phil_health: Option<Money>,
}

/// Fully-computed insert row handed to the repository.
#[derive(Debug)]
pub struct NewPayrollEntry {
    pub employee_id: DbId,
    pub name: String,
    pub position: String,
    pub department: String,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    pub salary: Money,
    pub days_worked: i64,
    pub overtime: Money,
    pub gross_pay: Money,
    pub sss: Money,
    pub pag_ibig: Money,
    pub phil_health: Money,
    pub total_deductions: Money,
    pub net_pay: Money,
}

/// Filters for the completed-payrolls listing.
#[derive(Debug)]
pub struct CompletedPayrollFilter {
    pub month: u32,
    pub year: i32,
    pub department: Option<String>,
    pub employee_name: Option<String>,
}
