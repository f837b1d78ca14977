//! Repository for the `payrolls` table.
//!
//! The one-incomplete-entry-per-employee invariant is the
//! `uq_payrolls_incomplete` partial index. [`PayrollRepo::create`] inserts
//! unconditionally; a concurrent duplicate loses the race at the index and
//! the API layer translates the unique violation into a 409.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::payroll::{CompletedPayrollFilter, NewPayrollEntry, PayrollEntry};

/// Column list for payrolls queries.
const COLUMNS: &str = "id, employee_id, name, position, department, period_from, period_to, \
    salary, days_worked, overtime, gross_pay, sss, pag_ibig, phil_health, total_deductions, \
    net_pay, completed, created_at, updated_at";

/// Provides the payroll engine's persistence operations.
pub struct PayrollRepo;

impl PayrollRepo {
    /// Insert a computed payroll entry with `completed = false`.
    pub async fn create(
        pool: &PgPool,
        input: &NewPayrollEntry,
    ) -> Result<PayrollEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO payrolls
                (employee_id, name, position, department, period_from, period_to,
                 salary, days_worked, overtime, gross_pay, sss, pag_ibig, phil_health,
                 total_deductions, net_pay)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(input.employee_id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(input.period_from)
            .bind(input.period_to)
            .bind(input.salary)
            .bind(input.days_worked)
            .bind(input.overtime)
            .bind(input.gross_pay)
            .bind(input.sss)
            .bind(input.pag_ibig)
            .bind(input.phil_health)
            .bind(input.total_deductions)
            .bind(input.net_pay)
            .fetch_one(pool)
            .await
    }

    /// Find a payroll entry by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PayrollEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payrolls WHERE id = $1");
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `completed` to true. Idempotent: marking an already-completed
    /// entry is a no-op that still returns the row.
    pub async fn mark_completed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PayrollEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE payrolls SET completed = TRUE
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a payroll entry in any state. Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payrolls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Paginated listing of incomplete entries, newest first.
    pub async fn list_uncompleted(
        pool: &PgPool,
        department: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PayrollEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payrolls
             WHERE NOT completed
               AND ($1::text IS NULL OR department = $1)
             ORDER BY created_at DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(department)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total count of incomplete entries matching the department filter.
    pub async fn count_uncompleted(
        pool: &PgPool,
        department: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM payrolls
             WHERE NOT completed
               AND ($1::text IS NULL OR department = $1)",
        )
        .bind(department)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Paginated listing of completed entries for one creation month, with
    /// optional department and employee-name equality filters.
    pub async fn list_completed(
        pool: &PgPool,
        filter: &CompletedPayrollFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PayrollEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payrolls
             WHERE completed
               AND EXTRACT(MONTH FROM created_at)::int = $1
               AND EXTRACT(YEAR FROM created_at)::int = $2
               AND ($3::text IS NULL OR department = $3)
               AND ($4::text IS NULL OR name = $4)
             ORDER BY created_at DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, PayrollEntry>(&query)
            .bind(filter.month as i32)
            .bind(filter.year)
            .bind(&filter.department)
            .bind(&filter.employee_name)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total count of completed entries matching the filter.
    pub async fn count_completed(
        pool: &PgPool,
        filter: &CompletedPayrollFilter,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM payrolls
             WHERE completed
               AND EXTRACT(MONTH FROM created_at)::int = $1
               AND EXTRACT(YEAR FROM created_at)::int = $2
               AND ($3::text IS NULL OR department = $3)
               AND ($4::text IS NULL OR name = $4)",
        )
        .bind(filter.month as i32)
        .bind(filter.year)
        .bind(&filter.department)
        .bind(&filter.employee_name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Whether the employee currently has an incomplete entry.
    pub async fn has_incomplete(pool: &PgPool, employee_id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM payrolls WHERE employee_id = $1 AND NOT completed)",
        )
        .bind(employee_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Count of all incomplete entries (dashboard widget).
    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM payrolls WHERE NOT completed")
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
