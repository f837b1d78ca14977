//! Route definitions for the employee registry.
//!
//! Paths keep the SPA's existing shapes (`/saves`, `/all`, `/update/{id}`).

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::employee;
use crate::state::AppState;

/// ```text
/// POST   /saves              -> save_employee (admin, multipart)
/// GET    /all                -> list_employees
/// GET    /employees/{id}     -> get_employee
/// PUT    /update/{id}        -> update_employee (admin)
/// DELETE /delete/{id}        -> delete_employee (admin)
/// POST   /update-photo/{id}  -> update_photo (admin, multipart)
/// GET    /count              -> count_employees
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/saves", post(employee::save_employee))
        .route("/all", get(employee::list_employees))
        .route("/employees/{id}", get(employee::get_employee))
        .route("/update/{id}", put(employee::update_employee))
        .route("/delete/{id}", delete(employee::delete_employee))
        .route("/update-photo/{id}", post(employee::update_photo))
        .route("/count", get(employee::count_employees))
}
