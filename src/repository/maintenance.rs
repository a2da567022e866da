//! Maintenance records repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{MaintenancePriority, MaintenanceStatus},
        maintenance::{CreateMaintenance, MaintenanceRecord, UpdateMaintenance},
    },
};

/// Field changes applied by an update, with the lifecycle timestamps the
/// service computed from the status transition
#[derive(Debug, Default)]
pub struct MaintenanceChanges {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List records, optionally filtered by status, newest first
    pub async fn list(&self, status: Option<MaintenanceStatus>) -> AppResult<Vec<MaintenanceRecord>> {
        let rows = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT * FROM maintenance_records
            WHERE $1::maintenance_status IS NULL OR status = $1
            ORDER BY reported_at DESC
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a record by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceRecord> {
        sqlx::query_as::<_, MaintenanceRecord>("SELECT * FROM maintenance_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// Create a record
    pub async fn create(
        &self,
        data: &CreateMaintenance,
        priority: MaintenancePriority,
        is_from_checklist: bool,
    ) -> AppResult<MaintenanceRecord> {
        let row = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records
                (equipment_id, issue_description, priority, reported_by,
                 estimated_cost, notes, is_from_checklist)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(&data.issue_description)
        .bind(priority)
        .bind(&data.reported_by)
        .bind(data.estimated_cost)
        .bind(&data.notes)
        .bind(is_from_checklist)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update triage fields; only provided fields change
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateMaintenance,
        changes: &MaintenanceChanges,
    ) -> AppResult<MaintenanceRecord> {
        let mut sets = Vec::new();
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.status, "status");
        add_field!(data.priority, "priority");
        add_field!(data.work_performed, "work_performed");
        add_field!(data.parts_used, "parts_used");
        add_field!(data.technician_name, "technician_name");
        add_field!(data.actual_cost, "actual_cost");
        add_field!(data.downtime_hours, "downtime_hours");
        add_field!(data.notes, "notes");
        add_field!(changes.started_at, "started_at");
        add_field!(changes.completed_at, "completed_at");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }
        let _ = idx;


        let query = format!(
            "UPDATE maintenance_records SET {} WHERE id = $1 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, MaintenanceRecord>(&query).bind(id);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.status);
        bind_field!(data.priority);
        bind_field!(data.work_performed);
        bind_field!(data.parts_used);
        bind_field!(data.technician_name);
        bind_field!(data.actual_cost);
        bind_field!(data.downtime_hours);
        bind_field!(data.notes);
        bind_field!(changes.started_at);
        bind_field!(changes.completed_at);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance record {} not found", id)))
    }

    /// Delete a record
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance record {} not found", id)));
        }
        Ok(())
    }
}
