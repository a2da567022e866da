//! Equipment units service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipmentUnit, EquipmentUnit},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_active(&self) -> AppResult<Vec<EquipmentUnit>> {
        self.repository.equipment.list_active().await
    }

    /// The unit pre-selected on the operator checklist: the default unit,
    /// or the first active unit when no default exists
    pub async fn default_unit(&self) -> AppResult<EquipmentUnit> {
        self.repository
            .equipment
            .find_default()
            .await?
            .ok_or_else(|| AppError::NotFound("No active equipment units".to_string()))
    }

    pub async fn create(&self, data: &CreateEquipmentUnit) -> AppResult<EquipmentUnit> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if self.repository.equipment.unit_number_exists(&data.unit_number).await? {
            return Err(AppError::Conflict(format!(
                "Unit number {} already exists",
                data.unit_number
            )));
        }
        self.repository.equipment.create(data).await
    }

    pub async fn set_default(&self, id: Uuid) -> AppResult<EquipmentUnit> {
        self.repository.equipment.set_default(id).await
    }

    pub async fn deactivate(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.soft_delete(id).await
    }
}
