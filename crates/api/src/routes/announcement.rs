//! Route definitions for the announcement board.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// ```text
/// GET  /announcements              -> list
/// POST /announcements              -> post (admin)
/// GET  /unread-announcements-count -> unread_count
/// POST /mark-announcements-read    -> mark_all_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/announcements",
            get(announcement::list).post(announcement::post),
        )
        .route(
            "/unread-announcements-count",
            get(announcement::unread_count),
        )
        .route("/mark-announcements-read", post(announcement::mark_all_read))
}
