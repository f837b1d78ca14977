//! Route definitions for the attendance ledger.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// ```text
/// POST /attendance/clock-in                 -> clock_in (multipart)
/// POST /attendance/clock-out                -> clock_out (multipart)
/// POST /attendance/reset                    -> reset (admin)
/// GET  /attendance/{employee_id}?date=      -> list_for_day
/// GET  /employee-attendance/{employee_id}   -> list_history (?month=&year=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/attendance/clock-in", post(attendance::clock_in))
        .route("/attendance/clock-out", post(attendance::clock_out))
        .route("/attendance/reset", post(attendance::reset))
        .route("/attendance/{employee_id}", get(attendance::list_for_day))
        .route(
            "/employee-attendance/{employee_id}",
            get(attendance::list_history),
        )
}
