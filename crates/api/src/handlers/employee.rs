//! Handlers for the employee registry.
//!
//! Creation and photo replacement arrive as multipart forms because they
//! carry an image file. The photo is always stored before the database
//! write, with a compensating delete if the write fails, so a half-written
//! row can never reference a missing file.

use axum::extract::multipart::Multipart;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrms_core::error::CoreError;
use hrms_core::pagination::{clamp_limit, clamp_page, page_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use hrms_core::types::DbId;
use serde::Deserialize;
use validator::Validate;

use hrms_db::models::employee::{CreateEmployee, EmployeeListParams, UpdateEmployee};
use hrms_db::repositories::EmployeeRepo;

use crate::error::{AppError, AppResult};
use crate::form::FormData;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::DepartmentFilter;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::uploads::DIR_EMPLOYEE_PHOTOS;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the employee listing.
#[derive(Debug, Deserialize)]
pub struct EmployeeListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortDirection")]
    pub sort_direction: Option<String>,
    pub department: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/saves
///
/// Create an employee from a multipart form with an optional portrait photo.
pub async fn save_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = FormData::read(multipart).await?;

    let hire_date = hrms_core::attendance::parse_date(form.require("hire_date")?)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let mut input = CreateEmployee {
        employee_code: form.require("employee_code")?.to_string(),
        name: form.require("name")?.to_string(),
        position: form.require("position")?.to_string(),
        department: form.require("department")?.to_string(),
        address: form.require("address")?.to_string(),
        salary: form.require_money("salary")?,
        sss: form.money_or_zero("sss")?,
        pag_ibig: form.money_or_zero("pag_ibig")?,
        phil_health: form.money_or_zero("phil_health")?,
        email: form.require("email")?.to_string(),
        hire_date,
        photo: None,
    };

    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    // Store the photo (if any) before touching the database.
    if let Some(bytes) = form.file("photo") {
        let stored = state.photos.store(DIR_EMPLOYEE_PHOTOS, bytes).await?;
        input.photo = Some(stored);
    }

    let created = match EmployeeRepo::create(&state.pool, &input).await {
        Ok(employee) => employee,
        Err(e) => {
            // The row never landed; drop the orphaned photo.
            if let Some(photo) = &input.photo {
                state.photos.remove_quietly(photo).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        user_id = admin.user_id,
        employee_id = created.id,
        employee_code = %created.employee_code,
        "Employee created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/all
///
/// Paginated, sorted employee listing with an optional department filter.
pub async fn list_employees(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(query.page);
    let per_page = clamp_limit(query.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let department = match query.department.as_deref() {
        None | Some("all") => None,
        Some(dept) => Some(dept.to_string()),
    };

    let params = EmployeeListParams {
        department,
        sort_by: query.sort_by.unwrap_or_else(|| "name".to_string()),
        sort_direction: query.sort_direction.unwrap_or_else(|| "asc".to_string()),
        limit: per_page,
        offset: page_offset(page, per_page),
    };

    let employees = EmployeeRepo::list(&state.pool, &params).await?;
    let total = EmployeeRepo::count(&state.pool, params.department.as_deref()).await?;

    Ok(Json(PageResponse::new(employees, page, per_page, total)))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;
    Ok(Json(DataResponse { data: employee }))
}

/// PUT /api/update/{id}
///
/// Partial update of an employee's registry fields.
pub async fn update_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployee>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let employee = EmployeeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    tracing::info!(user_id = admin.user_id, employee_id = id, "Employee updated");

    Ok(Json(DataResponse { data: employee }))
}

/// POST /api/update-photo/{id}
///
/// Replace an employee's portrait photo. The new file is stored first; only
/// then is the reference swapped and the old file removed.
pub async fn update_photo(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    let bytes = form.require_file("photo")?;

    let previous = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?
        .photo;

    let stored = state.photos.store(DIR_EMPLOYEE_PHOTOS, bytes).await?;

    let employee = match EmployeeRepo::set_photo(&state.pool, id, Some(&stored)).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            state.photos.remove_quietly(&stored).await;
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Employee",
                id,
            }));
        }
        Err(e) => {
            state.photos.remove_quietly(&stored).await;
            return Err(e.into());
        }
    };

    if let Some(old) = previous {
        state.photos.remove_quietly(&old).await;
    }

    tracing::info!(user_id = admin.user_id, employee_id = id, "Employee photo replaced");

    Ok(Json(DataResponse { data: employee }))
}

/// DELETE /api/delete/{id}
///
/// Soft-delete an employee and remove the photo asset.
pub async fn delete_employee(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EmployeeRepo::soft_delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }))?;

    if let Some(photo) = &deleted.photo {
        state.photos.remove_quietly(photo).await;
    }

    tracing::info!(user_id = admin.user_id, employee_id = id, "Employee deleted");

    Ok(Json(serde_json::json!({
        "message": "Employee deleted successfully"
    })))
}

/// GET /api/count
///
/// Headcount, total or for one department (`?department=`).
pub async fn count_employees(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<DepartmentFilter>,
) -> AppResult<impl IntoResponse> {
    let total = EmployeeRepo::count(&state.pool, filter.effective()).await?;
    Ok(Json(serde_json::json!({ "total": total })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the fields present on a partial update.
fn validate_update(input: &UpdateEmployee) -> AppResult<()> {
    if let Some(salary) = input.salary {
        if salary < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "Salary must not be negative".into(),
            )));
        }
    }
    for (label, amount) in [
        ("sss", input.sss),
        ("pag_ibig", input.pag_ibig),
        ("phil_health", input.phil_health),
    ] {
        if let Some(amount) = amount {
            if amount < 0 {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "Amount '{label}' must not be negative"
                ))));
            }
        }
    }
    if let Some(email) = &input.email {
        if !validator::ValidateEmail::validate_email(email) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "'{email}' is not a valid email address"
            ))));
        }
    }
    for (label, value) in [
        ("employee_code", &input.employee_code),
        ("name", &input.name),
        ("position", &input.position),
        ("department", &input.department),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                return Err(AppError::Core(CoreError::Validation(format!(
                    "Field '{label}' cannot be blank"
                ))));
            }
        }
    }
    Ok(())
}
