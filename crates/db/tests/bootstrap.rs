use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    hrms_db::health_check(&pool).await.unwrap();

    // Verify every table exists and is queryable.
    let tables = [
        "users",
        "sessions",
        "employees",
        "attendances",
        "payrolls",
        "employee_leaves",
        "announcements",
        "announcement_views",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}
