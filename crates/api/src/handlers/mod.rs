//! Request handlers, one module per resource.

pub mod announcement;
pub mod attendance;
pub mod auth;
pub mod employee;
pub mod leave;
pub mod payroll;
