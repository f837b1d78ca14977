//! Route definitions for the payroll engine.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::payroll;
use crate::state::AppState;

/// ```text
/// POST   /payroll                                  -> create_payroll (admin)
/// GET    /uncompleted-payrolls                     -> list_uncompleted (admin)
/// GET    /completed-payrolls                       -> list_completed
/// PUT    /done/{id}                                -> mark_done (admin)
/// DELETE /delete-payroll/{id}                      -> delete_payroll (admin)
/// GET    /check-incomplete-payroll/{employee_id}   -> check_incomplete
/// GET    /count-pending-payroll                    -> count_pending (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payroll", post(payroll::create_payroll))
        .route("/uncompleted-payrolls", get(payroll::list_uncompleted))
        .route("/completed-payrolls", get(payroll::list_completed))
        .route("/done/{id}", put(payroll::mark_done))
        .route("/delete-payroll/{id}", delete(payroll::delete_payroll))
        .route(
            "/check-incomplete-payroll/{employee_id}",
            get(payroll::check_incomplete),
        )
        .route("/count-pending-payroll", get(payroll::count_pending))
}
