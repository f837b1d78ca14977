//! Handlers for the leave tracker.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::leave::{validate_submission, LeaveStatus};
use hrms_core::types::DbId;
use serde::Deserialize;

use hrms_db::models::leave::{NewLeaveRequest, SubmitLeaveRequest};
use hrms_db::repositories::{EmployeeRepo, LeaveRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the per-employee leave listing.
#[derive(Debug, Deserialize)]
pub struct LeaveListQuery {
    pub employee_id: DbId,
}

/// POST /api/users-add-leave
///
/// Submit a leave request. Display fields (name, position, department) are
/// denormalized from the employee row; the request starts `pending`.
pub async fn submit_leave(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitLeaveRequest>,
) -> AppResult<impl IntoResponse> {
    validate_submission(&input.leave_type, input.from_date, input.to_date, &input.reason)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let employee = EmployeeRepo::find_by_id(&state.pool, input.employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: input.employee_id,
        }))?;

    let new_leave = NewLeaveRequest {
        employee_id: employee.id,
        name: employee.name.clone(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        leave_type: input.leave_type.clone(),
        from_date: input.from_date,
        to_date: input.to_date,
        reason: input.reason.clone(),
    };

    let leave = LeaveRepo::create(&state.pool, &new_leave).await?;

    tracing::info!(
        user_id = auth.user_id,
        leave_id = leave.id,
        employee_id = leave.employee_id,
        "Leave request submitted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: leave })))
}

/// GET /api/user-leaves?employee_id=
///
/// All leave requests for one employee, newest first.
pub async fn list_for_employee(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<LeaveListQuery>,
) -> AppResult<impl IntoResponse> {
    let leaves = LeaveRepo::list_by_employee(&state.pool, query.employee_id).await?;
    Ok(Json(DataResponse { data: leaves }))
}

/// GET /api/employee-leaves
///
/// Admin view: all leave requests, newest first.
pub async fn list_all(
    RequireAdmin(_): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let leaves = LeaveRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: leaves }))
}

/// PUT /api/employee-leaves/{id}/accept
pub async fn accept(
    admin: RequireAdmin,
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    decide(admin, state, id, LeaveStatus::Approved).await
}

/// PUT /api/employee-leaves/{id}/reject
pub async fn reject(
    admin: RequireAdmin,
    state: State<AppState>,
    id: Path<DbId>,
) -> AppResult<impl IntoResponse> {
    decide(admin, state, id, LeaveStatus::Rejected).await
}

/// Decide a pending request, exactly once.
///
/// The conditional update only matches `status = 'pending'`; when nothing
/// matches, a second read distinguishes a missing request (404) from an
/// already-decided one (409).
async fn decide(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    outcome: LeaveStatus,
) -> AppResult<Json<DataResponse<hrms_db::models::leave::LeaveRequest>>> {
    if let Some(leave) = LeaveRepo::decide(&state.pool, id, outcome).await? {
        tracing::info!(
            user_id = admin.user_id,
            leave_id = id,
            status = outcome.as_str(),
            "Leave request decided"
        );
        return Ok(Json(DataResponse { data: leave }));
    }

    match LeaveRepo::find_by_id(&state.pool, id).await? {
        Some(existing) => Err(AppError::Core(CoreError::Conflict(format!(
            "Leave request {id} was already {}",
            existing.status
        )))),
        None => Err(AppError::Core(CoreError::NotFound {
            entity: "LeaveRequest",
            id,
        })),
    }
}
