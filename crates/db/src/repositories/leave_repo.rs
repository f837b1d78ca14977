//! Repository for the `employee_leaves` table.

use hrms_core::leave::LeaveStatus;
use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::leave::{LeaveRequest, NewLeaveRequest};

/// Column list for employee_leaves queries.
const COLUMNS: &str = "id, employee_id, name, position, department, leave_type, \
    from_date, to_date, reason, status, decided_at, created_at, updated_at";

/// Provides leave-request storage and the one-shot decision update.
pub struct LeaveRepo;

impl LeaveRepo {
    /// Create a leave request with status `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &NewLeaveRequest,
    ) -> Result<LeaveRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee_leaves
                (employee_id, name, position, department, leave_type, from_date, to_date, reason)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(input.employee_id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.department)
            .bind(&input.leave_type)
            .bind(input.from_date)
            .bind(input.to_date)
            .bind(&input.reason)
            .fetch_one(pool)
            .await
    }

    /// Find a leave request by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LeaveRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_leaves WHERE id = $1");
        sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All requests for one employee, newest first.
    pub async fn list_by_employee(
        pool: &PgPool,
        employee_id: DbId,
    ) -> Result<Vec<LeaveRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employee_leaves
             WHERE employee_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(employee_id)
            .fetch_all(pool)
            .await
    }

    /// All requests across all employees, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<LeaveRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee_leaves ORDER BY created_at DESC");
        sqlx::query_as::<_, LeaveRequest>(&query).fetch_all(pool).await
    }

    /// Decide a pending request. The `status = 'pending'` predicate makes
    /// the transition one-way: a request already decided is not matched and
    /// `None` is returned, leaving the caller to distinguish missing from
    /// already-decided.
    pub async fn decide(
        pool: &PgPool,
        id: DbId,
        outcome: LeaveStatus,
    ) -> Result<Option<LeaveRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE employee_leaves SET status = $2, decided_at = now()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LeaveRequest>(&query)
            .bind(id)
            .bind(outcome.as_str())
            .fetch_optional(pool)
            .await
    }
}
