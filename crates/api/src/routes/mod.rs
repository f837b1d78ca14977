//! Route definitions, one module per resource.
//!
//! The SPA's API surface is flat (`/api/saves`, `/api/done/{id}`, ...), so
//! resource routers are merged rather than nested under sub-prefixes.

pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod employee;
pub mod health;
pub mod leave;
pub mod payroll;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /login, /refresh                       session issue (public)
/// POST   /logout                                session revoke
///
/// POST   /saves                                 employee create (multipart)
/// GET    /all                                   employee listing
/// GET    /employees/{id}                        employee detail
/// PUT    /update/{id}                           employee update
/// DELETE /delete/{id}                           employee delete
/// POST   /update-photo/{id}                     photo swap (multipart)
/// GET    /count                                 headcount
///
/// POST   /attendance/clock-in, /clock-out       attendance writes (multipart)
/// POST   /attendance/reset                      daily reset sweep
/// GET    /attendance/{employee_id}?date=        day listing
/// GET    /employee-attendance/{employee_id}     history listing
///
/// POST   /payroll                               payroll create
/// GET    /uncompleted-payrolls                  pending listing
/// GET    /completed-payrolls                    completed listing
/// PUT    /done/{id}                             mark completed
/// DELETE /delete-payroll/{id}                   payroll delete
/// GET    /check-incomplete-payroll/{employee_id} guard
/// GET    /count-pending-payroll                 pending count
///
/// POST   /users-add-leave                       leave submission
/// GET    /user-leaves?employee_id=              own leave listing
/// GET    /employee-leaves                       all leaves (admin)
/// PUT    /employee-leaves/{id}/accept|reject    leave decision
///
/// GET    /announcements                         announcement listing
/// POST   /announcements                         announcement post
/// GET    /unread-announcements-count            unread counter
/// POST   /mark-announcements-read               read sweep
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(employee::router())
        .merge(attendance::router())
        .merge(payroll::router())
        .merge(leave::router())
        .merge(announcement::router())
}
