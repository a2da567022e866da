//! Qualified drivers repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::driver::{CreateDriver, Driver, UpdateDriver},
};

#[derive(Clone)]
pub struct DriversRepository {
    pool: Pool<Postgres>,
}

impl DriversRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Active drivers, name-ordered
    pub async fn list_active(&self) -> AppResult<Vec<Driver>> {
        let rows = sqlx::query_as::<_, Driver>(
            "SELECT * FROM qualified_drivers WHERE is_active ORDER BY driver_name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a driver by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>("SELECT * FROM qualified_drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    /// Exact-match lookup of an active driver by badge number
    pub async fn find_active_by_badge(&self, badge_number: &str) -> AppResult<Option<Driver>> {
        let row = sqlx::query_as::<_, Driver>(
            "SELECT * FROM qualified_drivers WHERE badge_number = $1 AND is_active LIMIT 1",
        )
        .bind(badge_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Whether another active driver already uses this badge number
    pub async fn badge_exists(&self, badge_number: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM qualified_drivers
            WHERE badge_number = $1 AND is_active AND ($2::uuid IS NULL OR id != $2)
            "#,
        )
        .bind(badge_number)
        .bind(exclude)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    /// Create a driver
    pub async fn create(&self, data: &CreateDriver) -> AppResult<Driver> {
        let row = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO qualified_drivers (badge_number, driver_name, certified_date, recertify_date, trainer)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.badge_number)
        .bind(&data.driver_name)
        .bind(data.certified_date)
        .bind(data.recertify_date)
        .bind(&data.trainer)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a driver
    pub async fn update(&self, id: Uuid, data: &UpdateDriver) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>(
            r#"
            UPDATE qualified_drivers
            SET badge_number = $2, driver_name = $3, certified_date = $4,
                recertify_date = $5, trainer = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.badge_number)
        .bind(&data.driver_name)
        .bind(data.certified_date)
        .bind(data.recertify_date)
        .bind(&data.trainer)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    /// Soft-deactivate a driver
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE qualified_drivers SET is_active = FALSE WHERE id = $1 AND is_active",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Driver {} not found", id)));
        }
        Ok(())
    }
}
