//! Fail notifications repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::notification::FailNotification,
};

#[derive(Clone)]
pub struct NotificationsRepository {
    pool: Pool<Postgres>,
}

impl NotificationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Unread notifications, newest first
    pub async fn list_unread(&self) -> AppResult<Vec<FailNotification>> {
        let rows = sqlx::query_as::<_, FailNotification>(
            "SELECT * FROM fail_notifications WHERE NOT is_read ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a notification by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<FailNotification> {
        sqlx::query_as::<_, FailNotification>("SELECT * FROM fail_notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    /// Mark a notification read. Idempotent: marking an already-read
    /// notification is a no-op success.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<FailNotification> {
        sqlx::query_as::<_, FailNotification>(
            "UPDATE fail_notifications SET is_read = TRUE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }
}
