//! Leave tracker invariants: one-way status transitions.

use chrono::NaiveDate;
use sqlx::PgPool;

use hrms_core::leave::LeaveStatus;
use hrms_db::models::employee::CreateEmployee;
use hrms_db::models::leave::NewLeaveRequest;
use hrms_db::repositories::{EmployeeRepo, LeaveRepo};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_leave(pool: &PgPool, code: &str) -> hrms_db::models::leave::LeaveRequest {
    let employee = EmployeeRepo::create(
        pool,
        &CreateEmployee {
            employee_code: code.to_string(),
            name: "Maria Santos".to_string(),
            position: "Designer".to_string(),
            department: "Marketing".to_string(),
            address: "789 Hill Rd".to_string(),
            salary: 80_000,
            sss: 0,
            pag_ibig: 0,
            phil_health: 0,
            email: format!("{code}@example.com"),
            hire_date: date(2022, 9, 1),
            photo: None,
        },
    )
    .await
    .unwrap();

    LeaveRepo::create(
        pool,
        &NewLeaveRequest {
            employee_id: employee.id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            department: employee.department.clone(),
            leave_type: "vacation".to_string(),
            from_date: date(2025, 5, 1),
            to_date: date(2025, 5, 3),
            reason: "Family trip".to_string(),
        },
    )
    .await
    .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn submission_starts_pending(pool: PgPool) {
    let leave = seed_leave(&pool, "LV-001").await;
    assert_eq!(leave.status, "pending");
    assert!(leave.decided_at.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn approval_is_one_way(pool: PgPool) {
    let leave = seed_leave(&pool, "LV-002").await;

    let approved = LeaveRepo::decide(&pool, leave.id, LeaveStatus::Approved)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.status, "approved");
    assert!(approved.decided_at.is_some());

    // Re-deciding (either way) matches nothing.
    assert!(LeaveRepo::decide(&pool, leave.id, LeaveStatus::Rejected).await.unwrap().is_none());
    assert!(LeaveRepo::decide(&pool, leave.id, LeaveStatus::Approved).await.unwrap().is_none());

    let stored = LeaveRepo::find_by_id(&pool, leave.id).await.unwrap().unwrap();
    assert_eq!(stored.status, "approved", "decision must not be overwritten");
}

#[sqlx::test(migrations = "./migrations")]
async fn rejection_is_one_way(pool: PgPool) {
    let leave = seed_leave(&pool, "LV-003").await;

    let rejected = LeaveRepo::decide(&pool, leave.id, LeaveStatus::Rejected)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rejected.status, "rejected");

    assert!(LeaveRepo::decide(&pool, leave.id, LeaveStatus::Approved).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn deciding_missing_request_matches_nothing(pool: PgPool) {
    assert!(LeaveRepo::decide(&pool, 9999, LeaveStatus::Approved).await.unwrap().is_none());
    assert!(LeaveRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn listings_are_scoped_and_newest_first(pool: PgPool) {
    let first = seed_leave(&pool, "LV-004").await;
    let second = seed_leave(&pool, "LV-005").await;
    assert_ne!(first.employee_id, second.employee_id);

    let mine = LeaveRepo::list_by_employee(&pool, first.employee_id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, first.id);

    let all = LeaveRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}
