//! Handlers for the attendance ledger.
//!
//! Clock-in and clock-out arrive as multipart forms carrying a capture
//! photo. Photos are stored before the row write with a compensating delete
//! on failure. The one-open-record-per-employee-per-day rule is enforced by
//! the `uq_attendances_open_day` partial index; the error classifier turns
//! a violation into a 409.

use axum::extract::multipart::Multipart;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use hrms_core::attendance::{parse_clock, parse_date, validate_month_filter};
use hrms_core::error::CoreError;
use hrms_core::types::DbId;
use serde::Deserialize;

use hrms_db::models::attendance::CreateAttendance;
use hrms_db::repositories::{AttendanceRepo, EmployeeRepo};

use crate::error::{AppError, AppResult};
use crate::form::FormData;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{DIR_CLOCK_IN, DIR_CLOCK_OUT};

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the single-day attendance read.
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

/// Query parameters for the attendance history read.
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/attendance/clock-in
///
/// Multipart fields: `employee_id`, `clock_in` (YYYY-MM-DD HH:MM:SS), and a
/// `clock_in_image` file. Opens a new attendance record; a second clock-in
/// for the same employee and day while one is still open is a 409.
pub async fn clock_in(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = FormData::read(multipart).await?;

    let employee_id = form.require_id("employee_id")?;
    let clock_in = parse_clock(form.require("clock_in")?)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let photo_bytes = form.require_file("clock_in_image")?;

    // Unknown or deleted employees cannot clock in.
    if EmployeeRepo::find_by_id(&state.pool, employee_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown employee id {employee_id}"
        ))));
    }

    let stored = state.photos.store(DIR_CLOCK_IN, photo_bytes).await?;

    let input = CreateAttendance {
        employee_id,
        work_date: clock_in.date_naive(),
        clock_in,
        clock_in_photo: stored.clone(),
    };

    let record = match AttendanceRepo::create(&state.pool, &input).await {
        Ok(record) => record,
        Err(e) => {
            state.photos.remove_quietly(&stored).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        user_id = auth.user_id,
        employee_id,
        record_id = record.id,
        "Clock-in recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: record })))
}

/// POST /api/attendance/clock-out
///
/// Multipart fields: `id` (record) *or* `employee_id`, `clock_out`, and a
/// `clock_out_image` file. Both addressing modes resolve to the same
/// update: closing the open record. 404 when no open record matches.
pub async fn clock_out(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = FormData::read(multipart).await?;

    let clock_out = parse_clock(form.require("clock_out")?)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    let photo_bytes = form.require_file("clock_out_image")?;

    // Resolve the target record from whichever address was supplied.
    let record = match (form.id("id")?, form.id("employee_id")?) {
        (Some(record_id), _) => AttendanceRepo::find_by_id(&state.pool, record_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "AttendanceRecord",
                id: record_id,
            }))?,
        (None, Some(employee_id)) => {
            AttendanceRepo::find_open_for_day(&state.pool, employee_id, clock_out.date_naive())
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "AttendanceRecord",
                    id: employee_id,
                }))?
        }
        (None, None) => {
            return Err(AppError::Core(CoreError::Validation(
                "Either 'id' or 'employee_id' is required".into(),
            )))
        }
    };

    if clock_out < record.clock_in {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Clock-out {clock_out} is before clock-in {}",
            record.clock_in
        ))));
    }

    let stored = state.photos.store(DIR_CLOCK_OUT, photo_bytes).await?;

    let closed = match AttendanceRepo::close(&state.pool, record.id, clock_out, &stored).await {
        // Already closed (or raced to closed): terminal records reject
        // further mutation as not-found.
        Ok(None) => {
            state.photos.remove_quietly(&stored).await;
            return Err(AppError::Core(CoreError::NotFound {
                entity: "AttendanceRecord",
                id: record.id,
            }));
        }
        Ok(Some(record)) => record,
        Err(e) => {
            state.photos.remove_quietly(&stored).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        user_id = auth.user_id,
        record_id = closed.id,
        employee_id = closed.employee_id,
        "Clock-out recorded"
    );

    Ok(Json(DataResponse { data: closed }))
}

/// GET /api/attendance/{employee_id}?date=YYYY-MM-DD
///
/// The employee's records for one calendar day. An empty day is a 404,
/// matching the shape the SPA expects.
pub async fn list_for_day(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
    Query(query): Query<DayQuery>,
) -> AppResult<impl IntoResponse> {
    let date =
        parse_date(&query.date).map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let records =
        AttendanceRepo::list_by_employee_and_date(&state.pool, employee_id, date).await?;

    if records.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AttendanceRecord",
            id: employee_id,
        }));
    }

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/employee-attendance/{employee_id}?month=&year=
///
/// Full attendance history for an employee, optionally filtered to one
/// month. Uses the same 404-on-empty policy as the single-day read.
pub async fn list_history(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(employee_id): Path<DbId>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    validate_month_filter(query.month, query.year)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let records =
        AttendanceRepo::list_by_employee(&state.pool, employee_id, query.month, query.year)
            .await?;

    if records.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "AttendanceRecord",
            id: employee_id,
        }));
    }

    Ok(Json(DataResponse { data: records }))
}

/// POST /api/attendance/reset
///
/// Force-close every record still open today. Idempotent: a second run
/// finds nothing open and closes zero records.
pub async fn reset(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let closed = AttendanceRepo::reset_open_for_day(&state.pool, now.date_naive(), now).await?;

    tracing::info!(user_id = admin.user_id, closed, "Attendance reset for today");

    Ok(Json(serde_json::json!({
        "message": "Attendance reset for today",
        "closed": closed,
    })))
}
