//! Fail notifications service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::notification::FailNotification,
    repository::Repository,
};

#[derive(Clone)]
pub struct NotificationsService {
    repository: Repository,
}

impl NotificationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Unread notifications, newest first
    pub async fn unread(&self) -> AppResult<Vec<FailNotification>> {
        self.repository.notifications.list_unread().await
    }

    /// Dismiss a notification. Idempotent: a second call on the same
    /// notification succeeds and leaves it read.
    pub async fn mark_read(&self, id: Uuid) -> AppResult<FailNotification> {
        self.repository.notifications.mark_read(id).await
    }
}
