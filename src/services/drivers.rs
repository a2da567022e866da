//! Qualified drivers service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::driver::{CreateDriver, Driver, UpdateDriver},
    repository::Repository,
};

#[derive(Clone)]
pub struct DriversService {
    repository: Repository,
}

impl DriversService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_active(&self) -> AppResult<Vec<Driver>> {
        self.repository.drivers.list_active().await
    }

    pub async fn create(&self, data: &CreateDriver) -> AppResult<Driver> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self.repository.drivers.badge_exists(data.badge_number.trim(), None).await? {
            return Err(AppError::Conflict(format!(
                "Badge number {} already exists",
                data.badge_number.trim()
            )));
        }
        self.repository.drivers.create(data).await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateDriver) -> AppResult<Driver> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self
            .repository
            .drivers
            .badge_exists(data.badge_number.trim(), Some(id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Badge number {} already exists",
                data.badge_number.trim()
            )));
        }
        self.repository.drivers.update(id, data).await
    }

    pub async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        self.repository.drivers.soft_delete(id).await
    }
}
