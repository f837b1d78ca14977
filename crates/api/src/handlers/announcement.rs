//! Handlers for the announcement board.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use hrms_core::announcement::validate_content;
use hrms_core::error::CoreError;

use hrms_db::models::announcement::PostAnnouncement;
use hrms_db::repositories::AnnouncementRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/announcements
///
/// All announcements, newest first.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let announcements = AnnouncementRepo::list_recent(&state.pool).await?;
    Ok(Json(DataResponse { data: announcements }))
}

/// POST /api/announcements
pub async fn post(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<PostAnnouncement>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.announcement)
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let announcement = AnnouncementRepo::create(&state.pool, &input.announcement).await?;

    tracing::info!(
        user_id = admin.user_id,
        announcement_id = announcement.id,
        "Announcement posted"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: announcement })))
}

/// GET /api/unread-announcements-count
///
/// Count of announcements the calling user has not read yet.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = AnnouncementRepo::unread_count(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "unread_count": count })))
}

/// POST /api/mark-announcements-read
///
/// Record a view row for every announcement the caller has not read.
/// An announcement posted while the sweep runs simply stays unread.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let marked = AnnouncementRepo::mark_all_read(&state.pool, auth.user_id).await?;

    tracing::info!(user_id = auth.user_id, marked, "Announcements marked as read");

    Ok(Json(serde_json::json!({
        "message": "All announcements marked as read",
        "marked": marked,
    })))
}
