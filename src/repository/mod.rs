//! Repository layer for database operations

pub mod drivers;
pub mod equipment;
pub mod maintenance;
pub mod notifications;
pub mod questions;
pub mod submissions;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub questions: questions::QuestionsRepository,
    pub drivers: drivers::DriversRepository,
    pub submissions: submissions::SubmissionsRepository,
    pub notifications: notifications::NotificationsRepository,
    pub maintenance: maintenance::MaintenanceRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            questions: questions::QuestionsRepository::new(pool.clone()),
            drivers: drivers::DriversRepository::new(pool.clone()),
            submissions: submissions::SubmissionsRepository::new(pool.clone()),
            notifications: notifications::NotificationsRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            pool,
        }
    }
}
