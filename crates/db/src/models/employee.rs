//! Employee registry model.
//!
//! `salary` is the per-day rate in centavos; `sss`/`pag_ibig`/`phil_health`
//! are the statutory deduction baselines applied when payroll is run.

use chrono::NaiveDate;
use hrms_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `employees` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Employee {
    pub id: DbId,
    pub employee_code: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub address: String,
    pub salary: Money,
    pub sss: Money,
    pub pag_ibig: Money,
    pub phil_health: Money,
    pub email: String,
    pub hire_date: NaiveDate,
    pub photo: Option<String>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an employee. Built from multipart form fields by the
/// handler; the photo path is filled in after the upload is stored.
#[derive(Debug, Deserialize, validator::Validate)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 255))]
    pub employee_code: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub position: String,
    #[validate(length(min = 1, max = 255))]
    pub department: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(range(min = 0))]
    pub salary: Money,
    #[validate(range(min = 0))]
    pub sss: Money,
    #[validate(range(min = 0))]
    pub pag_ibig: Money,
    #[validate(range(min = 0))]
    pub phil_health: Money,
    #[validate(email)]
    pub email: String,
    pub hire_date: NaiveDate,
    pub photo: Option<String>,
}

/// DTO for a partial employee update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEmployee {
    pub employee_code: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub address: Option<String>,
    pub salary: Option<Money>,
    pub sss: Option<Money>,
    pub pag_ibig: Option<Money>,
    pub phil_health: Option<Money>,
    pub email: Option<String>,
    pub hire_date: Option<NaiveDate>,
}

/// Listing parameters for the employee registry.
#[derive(Debug)]
pub struct EmployeeListParams {
    pub department: Option<String>,
    pub sort_by: String,
    pub sort_direction: String,
    pub limit: i64,
    pub offset: i64,
}
