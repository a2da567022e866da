//! Maintenance records service

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{MaintenancePriority, MaintenanceStatus},
        maintenance::{CreateMaintenance, MaintenanceRecord, UpdateMaintenance},
    },
    repository::{maintenance::MaintenanceChanges, Repository},
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, status: Option<MaintenanceStatus>) -> AppResult<Vec<MaintenanceRecord>> {
        self.repository.maintenance.list(status).await
    }

    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<MaintenanceRecord> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.equipment.get_by_id(data.equipment_id).await?;
        let priority = data.priority.unwrap_or(MaintenancePriority::Medium);
        self.repository.maintenance.create(data, priority, false).await
    }

    /// Update triage fields, stamping started_at/completed_at on the
    /// first transition into in_progress/completed
    pub async fn update(&self, id: Uuid, data: &UpdateMaintenance) -> AppResult<MaintenanceRecord> {
        let current = self.repository.maintenance.get_by_id(id).await?;

        let mut changes = MaintenanceChanges::default();
        if let Some(status) = data.status {
            let now = Utc::now();
            if status == MaintenanceStatus::InProgress && current.started_at.is_none() {
                changes.started_at = Some(now);
            }
            if status == MaintenanceStatus::Completed && current.completed_at.is_none() {
                changes.completed_at = Some(now);
            }
        }

        self.repository.maintenance.update(id, data, &changes).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.maintenance.delete(id).await
    }

    /// Open a maintenance record from a fail notification. The issue text
    /// comes from the notification's commit-time snapshots, so it stays
    /// accurate even if the question was edited since.
    pub async fn open_from_notification(
        &self,
        notification_id: Uuid,
        priority: Option<MaintenancePriority>,
    ) -> AppResult<MaintenanceRecord> {
        let notification = self.repository.notifications.get_by_id(notification_id).await?;
        let submission = self
            .repository
            .submissions
            .get_by_id(notification.submission_id)
            .await?;

        let issue = match &notification.comment {
            Some(comment) => format!(
                "Failed checklist item: {} - {}",
                notification.question_text, comment
            ),
            None => format!("Failed checklist item: {}", notification.question_text),
        };

        let data = CreateMaintenance {
            equipment_id: submission.equipment_id,
            issue_description: issue,
            priority,
            reported_by: Some(notification.badge_number.clone()),
            estimated_cost: None,
            notes: None,
        };
        self.repository
            .maintenance
            .create(&data, priority.unwrap_or(MaintenancePriority::Medium), true)
            .await
    }
}
