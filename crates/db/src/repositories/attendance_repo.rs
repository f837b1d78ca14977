//! Repository for the `attendances` table.
//!
//! Open-record uniqueness (one open record per employee per day) is the
//! `uq_attendances_open_day` partial index; inserts racing on it surface a
//! unique violation rather than a second open row.

use chrono::NaiveDate;
use hrms_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::attendance::{AttendanceRecord, CreateAttendance};

/// Column list for attendances queries.
const COLUMNS: &str = "id, employee_id, work_date, clock_in, clock_out, \
    clock_in_photo, clock_out_photo, created_at, updated_at";

/// Provides the attendance ledger operations.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Open a new attendance record (clock-in).
    pub async fn create(
        pool: &PgPool,
        input: &CreateAttendance,
    ) -> Result<AttendanceRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendances (employee_id, work_date, clock_in, clock_in_photo)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(input.employee_id)
            .bind(input.work_date)
            .bind(input.clock_in)
            .bind(&input.clock_in_photo)
            .fetch_one(pool)
            .await
    }

    /// Find a record by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM attendances WHERE id = $1");
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the open record for an employee on a given day, if any.
    pub async fn find_open_for_day(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendances
             WHERE employee_id = $1 AND work_date = $2 AND clock_out IS NULL"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(work_date)
            .fetch_optional(pool)
            .await
    }

    /// Close an open record by id (clock-out). Returns `None` when the
    /// record does not exist or was already closed; closed records are
    /// terminal.
    pub async fn close(
        pool: &PgPool,
        id: DbId,
        clock_out: Timestamp,
        clock_out_photo: &str,
    ) -> Result<Option<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE attendances SET clock_out = $2, clock_out_photo = $3
             WHERE id = $1 AND clock_out IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(id)
            .bind(clock_out)
            .bind(clock_out_photo)
            .fetch_optional(pool)
            .await
    }

    /// All records for an employee on a given calendar day.
    pub async fn list_by_employee_and_date(
        pool: &PgPool,
        employee_id: DbId,
        work_date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendances
             WHERE employee_id = $1 AND work_date = $2
             ORDER BY clock_in ASC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(work_date)
            .fetch_all(pool)
            .await
    }

    /// All records for an employee, newest first, optionally restricted to
    /// one month.
    pub async fn list_by_employee(
        pool: &PgPool,
        employee_id: DbId,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendances
             WHERE employee_id = $1
               AND ($2::int IS NULL OR EXTRACT(MONTH FROM work_date)::int = $2)
               AND ($3::int IS NULL OR EXTRACT(YEAR FROM work_date)::int = $3)
             ORDER BY clock_in DESC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(employee_id)
            .bind(month.map(|m| m as i32))
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// Force-close every open record for the given day at `close_at`.
    /// Returns the number of records closed; running again on the same day
    /// finds nothing open and closes zero.
    pub async fn reset_open_for_day(
        pool: &PgPool,
        work_date: NaiveDate,
        close_at: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE attendances SET clock_out = $2
             WHERE work_date = $1 AND clock_out IS NULL",
        )
        .bind(work_date)
        .bind(close_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Number of distinct calendar days in [from, to] on which the employee
    /// has at least one closed record. Open-only days do not count.
    pub async fn days_worked(
        pool: &PgPool,
        employee_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(DISTINCT work_date) FROM attendances
             WHERE employee_id = $1
               AND work_date BETWEEN $2 AND $3
               AND clock_out IS NOT NULL",
        )
        .bind(employee_id)
        .bind(from)
        .bind(to)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
