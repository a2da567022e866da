//! Business logic services

pub mod badge;
pub mod checklist;
pub mod drivers;
pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod questions;
pub mod session;

use crate::{config::ChecklistConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub badge: badge::BadgeService,
    pub checklist: checklist::ChecklistService,
    pub equipment: equipment::EquipmentService,
    pub questions: questions::QuestionsService,
    pub drivers: drivers::DriversService,
    pub notifications: notifications::NotificationsService,
    pub maintenance: maintenance::MaintenanceService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, checklist_config: ChecklistConfig) -> Self {
        Self {
            badge: badge::BadgeService::new(repository.clone(), checklist_config.clone()),
            checklist: checklist::ChecklistService::new(repository.clone(), checklist_config),
            equipment: equipment::EquipmentService::new(repository.clone()),
            questions: questions::QuestionsService::new(repository.clone()),
            drivers: drivers::DriversService::new(repository.clone()),
            notifications: notifications::NotificationsService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository),
        }
    }
}
