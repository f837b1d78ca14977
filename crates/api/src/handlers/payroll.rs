//! Handlers for the payroll engine.
//!
//! Days worked are always derived server-side from the attendance ledger;
//! gross and net pay are computed from the employee's compensation baseline
//! in fixed-point centavos. The one-incomplete-entry-per-employee rule is
//! not checked with a pre-read: the insert races to the
//! `uq_payrolls_incomplete` partial index and a loser surfaces as 409.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use hrms_core::error::CoreError;
use hrms_core::pagination::{clamp_page, page_offset};
use hrms_core::payroll::{
    compute_totals, validate_amounts, validate_period, Deductions, PAYROLL_PAGE_SIZE,
};
use hrms_core::types::DbId;
use serde::Deserialize;

use hrms_db::models::payroll::{CompletedPayrollFilter, CreatePayrollRequest, NewPayrollEntry};
use hrms_db::repositories::{AttendanceRepo, EmployeeRepo, PayrollRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the uncompleted-payrolls listing.
#[derive(Debug, Deserialize)]
pub struct UncompletedQuery {
    pub page: Option<i64>,
    pub department: Option<String>,
}

/// Query parameters for the completed-payrolls listing. Month and year
/// default to the current month.
#[derive(Debug, Deserialize)]
pub struct CompletedQuery {
    pub page: Option<i64>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub department: Option<String>,
    pub employee_name: Option<String>,
}

/// Treat an absent filter or the SPA's `all` sentinel as no filter.
fn effective(filter: Option<String>) -> Option<String> {
    filter.filter(|value| value != "all" && !value.is_empty())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/payroll
///
/// Create a payroll entry for an employee and period. Deduction overrides
/// fall back to the employee's statutory baselines when omitted.
pub async fn create_payroll(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePayrollRequest>,
) -> AppResult<impl IntoResponse> {
    validate_period(input.period_from, input.period_to)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let employee = EmployeeRepo::find_by_id(&state.pool, input.employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: input.employee_id,
        }))?;

    let deductions = Deductions {
        sss: input.sss.unwrap_or(employee.sss),
        pag_ibig: input.pag_ibig.unwrap_or(employee.pag_ibig),
        phil_health: input.phil_health.unwrap_or(employee.phil_health),
    };
    validate_amounts(input.overtime, &deductions)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let days_worked = AttendanceRepo::days_worked(
        &state.pool,
        employee.id,
        input.period_from,
        input.period_to,
    )
    .await?;

    let totals = compute_totals(employee.salary, days_worked, input.overtime, &deductions);

    let new_entry = NewPayrollEntry {
        employee_id: employee.id,
        name: employee.name.clone(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        period_from: input.period_from,
        period_to: input.period_to,
        salary: employee.salary,
        days_worked,
        overtime: input.overtime,
        gross_pay: totals.gross_pay,
        sss: deductions.sss,
        pag_ibig: deductions.pag_ibig,
        phil_health: deductions.phil_health,
        total_deductions: totals.total_deductions,
        net_pay: totals.net_pay,
    };

    let payroll = PayrollRepo::create(&state.pool, &new_entry).await?;

    tracing::info!(
        user_id = admin.user_id,
        payroll_id = payroll.id,
        employee_id = payroll.employee_id,
        days_worked,
        net_pay = payroll.net_pay,
        "Payroll entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: payroll })))
}

/// GET /api/uncompleted-payrolls?page=&department=
pub async fn list_uncompleted(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<UncompletedQuery>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(query.page);
    let department = effective(query.department);

    let payrolls = PayrollRepo::list_uncompleted(
        &state.pool,
        department.as_deref(),
        PAYROLL_PAGE_SIZE,
        page_offset(page, PAYROLL_PAGE_SIZE),
    )
    .await?;
    let total = PayrollRepo::count_uncompleted(&state.pool, department.as_deref()).await?;

    Ok(Json(PageResponse::new(payrolls, page, PAYROLL_PAGE_SIZE, total)))
}

/// GET /api/completed-payrolls?month=&year=&department=&employee_name=&page=
pub async fn list_completed(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<CompletedQuery>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let month = query.month.unwrap_or(now.month());
    let year = query.year.unwrap_or(now.year());
    if !(1..=12).contains(&month) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Month must be between 1 and 12, got {month}"
        ))));
    }

    let filter = CompletedPayrollFilter {
        month,
        year,
        department: effective(query.department),
        employee_name: effective(query.employee_name),
    };

    let page = clamp_page(query.page);
    let payrolls = PayrollRepo::list_completed(
        &state.pool,
        &filter,
        PAYROLL_PAGE_SIZE,
        page_offset(page, PAYROLL_PAGE_SIZE),
    )
    .await?;
    let total = PayrollRepo::count_completed(&state.pool, &filter).await?;

    Ok(Json(PageResponse::new(payrolls, page, PAYROLL_PAGE_SIZE, total)))
}

/// PUT /api/done/{id}
///
/// Mark a payroll entry completed. Idempotent.
pub async fn mark_done(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let payroll = PayrollRepo::mark_completed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PayrollEntry",
            id,
        }))?;

    tracing::info!(user_id = admin.user_id, payroll_id = id, "Payroll marked as done");

    Ok(Json(DataResponse { data: payroll }))
}

/// DELETE /api/delete-payroll/{id}
///
/// Delete a payroll entry regardless of completion state.
pub async fn delete_payroll(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PayrollRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PayrollEntry",
            id,
        }));
    }

    tracing::info!(user_id = admin.user_id, payroll_id = id, "Payroll deleted");

    Ok(Json(serde_json::json!({
        "message": "Payroll deleted successfully"
    })))
}

/// GET /api/check-incomplete-payroll/{employee_id}
///
/// Boolean guard surfaced to the UI before offering payroll creation.
pub async fn check_incomplete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let has_incomplete = PayrollRepo::has_incomplete(&state.pool, employee_id).await?;
    Ok(Json(serde_json::json!({
        "hasIncompletePayroll": has_incomplete
    })))
}

/// GET /api/count-pending-payroll
pub async fn count_pending(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = PayrollRepo::count_pending(&state.pool).await?;
    Ok(Json(serde_json::json!({ "payrollCount": count })))
}
