//! Payroll engine invariants against a live schema: the one-incomplete-
//! entry rule, idempotent completion, and days-worked derivation.

use chrono::{NaiveDate, TimeZone, Utc};
use sqlx::PgPool;

use hrms_core::payroll::{compute_totals, Deductions};
use hrms_db::models::attendance::CreateAttendance;
use hrms_db::models::employee::CreateEmployee;
use hrms_db::models::payroll::NewPayrollEntry;
use hrms_db::repositories::{AttendanceRepo, EmployeeRepo, PayrollRepo};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seed_employee(pool: &PgPool, code: &str) -> hrms_db::models::employee::Employee {
    let input = CreateEmployee {
        employee_code: code.to_string(),
        name: "Jane Doe".to_string(),
        position: "Developer".to_string(),
        department: "IT".to_string(),
        address: "123 Main St".to_string(),
        salary: 100_000, // 1000.00 per day
        sss: 20_000,
        pag_ibig: 10_000,
        phil_health: 15_000,
        email: format!("{code}@example.com"),
        hire_date: date(2024, 1, 15),
        photo: None,
    };
    EmployeeRepo::create(pool, &input).await.unwrap()
}

/// Build an entry for the employee from the standard five-day scenario.
fn entry_for(employee: &hrms_db::models::employee::Employee, days_worked: i64) -> NewPayrollEntry {
    let deductions = Deductions {
        sss: employee.sss,
        pag_ibig: employee.pag_ibig,
        phil_health: employee.phil_health,
    };
    let totals = compute_totals(employee.salary, days_worked, 50_000, &deductions);
    NewPayrollEntry {
        employee_id: employee.id,
        name: employee.name.clone(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        period_from: date(2025, 3, 1),
        period_to: date(2025, 3, 15),
        salary: employee.salary,
        days_worked,
        overtime: 50_000,
        gross_pay: totals.gross_pay,
        sss: deductions.sss,
        pag_ibig: deductions.pag_ibig,
        phil_health: deductions.phil_health,
        total_deductions: totals.total_deductions,
        net_pay: totals.net_pay,
    }
}

/// Assert that an insert failed on the incomplete-payroll partial index.
fn assert_incomplete_conflict(err: sqlx::Error) {
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_payrolls_incomplete"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn stored_totals_match_recomputation(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP-001").await;
    let created = PayrollRepo::create(&pool, &entry_for(&employee, 5)).await.unwrap();

    // The Jane Doe scenario: gross 5500.00, deductions 450.00, net 5050.00.
    assert_eq!(created.gross_pay, 550_000);
    assert_eq!(created.total_deductions, 45_000);
    assert_eq!(created.net_pay, 505_000);
    assert!(!created.completed);

    // Recomputing from the stored inputs reproduces the stored totals.
    let deductions = Deductions {
        sss: created.sss,
        pag_ibig: created.pag_ibig,
        phil_health: created.phil_health,
    };
    let totals = compute_totals(created.salary, created.days_worked, created.overtime, &deductions);
    assert_eq!(totals.gross_pay, created.gross_pay);
    assert_eq!(totals.total_deductions, created.total_deductions);
    assert_eq!(totals.net_pay, created.net_pay);
}

#[sqlx::test(migrations = "./migrations")]
async fn second_incomplete_entry_is_rejected(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP-002").await;

    PayrollRepo::create(&pool, &entry_for(&employee, 5)).await.unwrap();
    let err = PayrollRepo::create(&pool, &entry_for(&employee, 5)).await.unwrap_err();
    assert_incomplete_conflict(err);
}

#[sqlx::test(migrations = "./migrations")]
async fn completion_frees_the_slot(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP-003").await;

    let first = PayrollRepo::create(&pool, &entry_for(&employee, 5)).await.unwrap();
    assert!(PayrollRepo::has_incomplete(&pool, employee.id).await.unwrap());

    let done = PayrollRepo::mark_completed(&pool, first.id).await.unwrap().unwrap();
    assert!(done.completed);
    assert!(!PayrollRepo::has_incomplete(&pool, employee.id).await.unwrap());

    // Marking again is a harmless no-op.
    let again = PayrollRepo::mark_completed(&pool, first.id).await.unwrap().unwrap();
    assert!(again.completed);

    // A new incomplete entry is accepted now.
    PayrollRepo::create(&pool, &entry_for(&employee, 3)).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn deletion_frees_the_slot(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP-004").await;

    let first = PayrollRepo::create(&pool, &entry_for(&employee, 5)).await.unwrap();
    assert!(PayrollRepo::delete(&pool, first.id).await.unwrap());
    assert!(!PayrollRepo::delete(&pool, first.id).await.unwrap(), "second delete finds nothing");

    PayrollRepo::create(&pool, &entry_for(&employee, 5)).await.unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_creates_produce_exactly_one_winner(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP-005").await;

    let entry_a = entry_for(&employee, 5);
    let entry_b = entry_for(&employee, 5);
    let a = PayrollRepo::create(&pool, &entry_a);
    let b = PayrollRepo::create(&pool, &entry_b);
    let (ra, rb) = tokio::join!(a, b);

    let winners = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1, "exactly one concurrent create may succeed");
    let loser = if ra.is_err() { ra } else { rb };
    assert_incomplete_conflict(loser.unwrap_err());
}

#[sqlx::test(migrations = "./migrations")]
async fn days_worked_counts_only_closed_distinct_days(pool: PgPool) {
    let employee = seed_employee(&pool, "EMP-006").await;

    // Three closed records across two days, one open record on a third day.
    let sessions = [
        (date(2025, 3, 3), 8, 17, true),
        (date(2025, 3, 3), 18, 20, true), // second interval, same day
        (date(2025, 3, 4), 8, 17, true),
        (date(2025, 3, 5), 8, 0, false), // never clocked out
    ];
    for (day, start_hour, end_hour, closed) in sessions {
        let clock_in = Utc
            .from_utc_datetime(&day.and_hms_opt(start_hour, 0, 0).unwrap());
        let record = AttendanceRepo::create(
            &pool,
            &CreateAttendance {
                employee_id: employee.id,
                work_date: day,
                clock_in,
                clock_in_photo: "clock_in/test.png".to_string(),
            },
        )
        .await
        .unwrap();
        if closed {
            let clock_out = Utc
                .from_utc_datetime(&day.and_hms_opt(end_hour, 0, 0).unwrap());
            AttendanceRepo::close(&pool, record.id, clock_out, "clock_out/test.png")
                .await
                .unwrap()
                .unwrap();
        }
    }

    let days = AttendanceRepo::days_worked(&pool, employee.id, date(2025, 3, 1), date(2025, 3, 15))
        .await
        .unwrap();
    assert_eq!(days, 2, "two distinct days have closed records");

    // A range excluding those days counts zero.
    let outside =
        AttendanceRepo::days_worked(&pool, employee.id, date(2025, 4, 1), date(2025, 4, 30))
            .await
            .unwrap();
    assert_eq!(outside, 0);
}
