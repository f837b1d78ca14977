//! Repository for the `employees` table.
//!
//! All reads exclude soft-deleted rows (`deleted_at IS NOT NULL`).

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, EmployeeListParams, UpdateEmployee};

/// Column list for employees queries.
const COLUMNS: &str = "id, employee_code, name, position, department, address, salary, \
    sss, pag_ibig, phil_health, email, hire_date, photo, deleted_at, created_at, updated_at";

/// Columns a listing may be sorted by. Anything else falls back to `name`.
const SORTABLE_COLUMNS: &[&str] = &[
    "name",
    "employee_code",
    "position",
    "department",
    "salary",
    "hire_date",
    "created_at",
];

/// Resolve a requested sort column against the whitelist.
fn sort_column(requested: &str) -> &'static str {
    SORTABLE_COLUMNS
        .iter()
        .find(|c| **c == requested)
        .copied()
        .unwrap_or("name")
}

/// Resolve a requested sort direction; anything but `desc` sorts ascending.
fn sort_direction(requested: &str) -> &'static str {
    if requested.eq_ignore_ascii_case("desc") {
        "DESC"
    } else {
        "ASC"
    }
}

/// Provides CRUD operations for the employee registry.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Create an employee, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees
                (employee_code, name, position, department, address, salary,
                 sss, pag_ibig, phil_health, email, hire_date, photo)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&input.employee_code)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(&input.address)
            .bind(input.salary)
            .bind(input.sss)
            .bind(input.pag_ibig)
            .bind(input.phil_health)
            .bind(&input.email)
            .bind(input.hire_date)
            .bind(&input.photo)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by id, excluding soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List employees with department filter, whitelisted sorting, and
    /// pagination.
    pub async fn list(
        pool: &PgPool,
        params: &EmployeeListParams,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let order = sort_column(&params.sort_by);
        let direction = sort_direction(&params.sort_direction);
        let query = format!(
            "SELECT {COLUMNS} FROM employees
             WHERE deleted_at IS NULL
               AND ($1::text IS NULL OR department = $1)
             ORDER BY {order} {direction}
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(&params.department)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(pool)
            .await
    }

    /// Count non-deleted employees, optionally restricted to a department.
    pub async fn count(pool: &PgPool, department: Option<&str>) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM employees
             WHERE deleted_at IS NULL
               AND ($1::text IS NULL OR department = $1)",
        )
        .bind(department)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Partially update an employee, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                employee_code = COALESCE($2, employee_code),
                name = COALESCE($3, name),
                position = COALESCE($4, position),
                department = COALESCE($5, department),
                address = COALESCE($6, address),
                salary = COALESCE($7, salary),
                sss = COALESCE($8, sss),
                pag_ibig = COALESCE($9, pag_ibig),
                phil_health = COALESCE($10, phil_health),
                email = COALESCE($11, email),
                hire_date = COALESCE($12, hire_date)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.employee_code)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(&input.address)
            .bind(input.salary)
            .bind(input.sss)
            .bind(input.pag_ibig)
            .bind(input.phil_health)
            .bind(&input.email)
            .bind(input.hire_date)
            .fetch_optional(pool)
            .await
    }

    /// Replace the stored photo reference, returning the updated row.
    pub async fn set_photo(
        pool: &PgPool,
        id: DbId,
        photo: Option<&str>,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET photo = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(photo)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an employee, returning the deleted row (so the caller
    /// can remove the photo asset). Already-deleted rows return `None`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET deleted_at = now()
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_column_falls_back_to_name() {
        assert_eq!(sort_column("salary"), "salary");
        assert_eq!(sort_column("password_hash"), "name");
        assert_eq!(sort_column("; DROP TABLE employees"), "name");
    }

    #[test]
    fn sort_direction_defaults_to_ascending() {
        assert_eq!(sort_direction("desc"), "DESC");
        assert_eq!(sort_direction("DESC"), "DESC");
        assert_eq!(sort_direction("asc"), "ASC");
        assert_eq!(sort_direction("sideways"), "ASC");
    }
}
