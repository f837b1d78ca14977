//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where partial updates exist

pub mod announcement;
pub mod attendance;
pub mod employee;
pub mod leave;
pub mod payroll;
pub mod session;
pub mod user;
