//! Repository for the `announcements` and `announcement_views` tables.

use hrms_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::Announcement;

/// Column list for announcements queries.
const COLUMNS: &str = "id, content, created_at, updated_at";

/// Provides the announcement board operations.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Post a new announcement.
    pub async fn create(pool: &PgPool, content: &str) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (content) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// All announcements, newest first.
    pub async fn list_recent(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM announcements ORDER BY created_at DESC");
        sqlx::query_as::<_, Announcement>(&query).fetch_all(pool).await
    }

    /// Count of announcements the user has not yet read.
    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM announcements a
             WHERE NOT EXISTS (
                 SELECT 1 FROM announcement_views v
                 WHERE v.announcement_id = a.id AND v.user_id = $1
             )",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Insert a view row for every announcement the user has not read.
    /// `ON CONFLICT DO NOTHING` makes the sweep safe against a concurrent
    /// sweep for the same user; an announcement posted mid-sweep simply
    /// stays unread. Returns the number of rows inserted.
    pub async fn mark_all_read(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO announcement_views (announcement_id, user_id)
             SELECT a.id, $1 FROM announcements a
             WHERE NOT EXISTS (
                 SELECT 1 FROM announcement_views v
                 WHERE v.announcement_id = a.id AND v.user_id = $1
             )
             ON CONFLICT ON CONSTRAINT uq_announcement_views_pair DO NOTHING",
        )
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
