//! Equipment units repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipmentUnit, EquipmentUnit},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List active units, name-ordered
    pub async fn list_active(&self) -> AppResult<Vec<EquipmentUnit>> {
        let rows = sqlx::query_as::<_, EquipmentUnit>(
            "SELECT * FROM equipment_units WHERE is_active ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a unit by ID (active or not)
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<EquipmentUnit> {
        sqlx::query_as::<_, EquipmentUnit>("SELECT * FROM equipment_units WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment unit {} not found", id)))
    }

    /// Get an active unit by ID
    pub async fn get_active_by_id(&self, id: Uuid) -> AppResult<EquipmentUnit> {
        sqlx::query_as::<_, EquipmentUnit>(
            "SELECT * FROM equipment_units WHERE id = $1 AND is_active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment unit {} not found", id)))
    }

    /// The default unit, falling back to the first active unit by name
    /// when no default is set (legacy data may have zero defaults)
    pub async fn find_default(&self) -> AppResult<Option<EquipmentUnit>> {
        let row = sqlx::query_as::<_, EquipmentUnit>(
            "SELECT * FROM equipment_units WHERE is_active ORDER BY is_default DESC, name LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Whether an active unit already uses this unit number
    pub async fn unit_number_exists(&self, unit_number: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM equipment_units WHERE unit_number = $1 AND is_active",
        )
        .bind(unit_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Create a unit
    pub async fn create(&self, data: &CreateEquipmentUnit) -> AppResult<EquipmentUnit> {
        let row = sqlx::query_as::<_, EquipmentUnit>(
            r#"
            INSERT INTO equipment_units (name, unit_number)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.unit_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Make one unit the default. Clear-old and set-new run in one
    /// transaction so a crash cannot leave two defaults; the partial
    /// unique index backs this up.
    pub async fn set_default(&self, id: Uuid) -> AppResult<EquipmentUnit> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE equipment_units SET is_default = FALSE WHERE is_default AND id != $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let unit = sqlx::query_as::<_, EquipmentUnit>(
            "UPDATE equipment_units SET is_default = TRUE WHERE id = $1 AND is_active RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment unit {} not found", id)))?;

        tx.commit().await?;
        Ok(unit)
    }

    /// Soft-delete a unit; historical submissions keep referencing it
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE equipment_units SET is_active = FALSE, is_default = FALSE WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment unit {} not found", id)));
        }
        Ok(())
    }
}
