//! Announcement board model.

use hrms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `announcements` table. Immutable once posted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Announcement {
    pub id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /api/announcements`.
#[derive(Debug, Deserialize)]
pub struct PostAnnouncement {
    pub announcement: String,
}
