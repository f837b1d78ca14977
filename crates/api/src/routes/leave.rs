//! Route definitions for the leave tracker.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::leave;
use crate::state::AppState;

/// ```text
/// POST /users-add-leave                 -> submit_leave
/// GET  /user-leaves?employee_id=        -> list_for_employee
/// GET  /employee-leaves                 -> list_all (admin)
/// PUT  /employee-leaves/{id}/accept     -> accept (admin)
/// PUT  /employee-leaves/{id}/reject     -> reject (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users-add-leave", post(leave::submit_leave))
        .route("/user-leaves", get(leave::list_for_employee))
        .route("/employee-leaves", get(leave::list_all))
        .route("/employee-leaves/{id}/accept", put(leave::accept))
        .route("/employee-leaves/{id}/reject", put(leave::reject))
}
