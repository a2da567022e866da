//! Checklist questions and assignments repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::question::Question,
};

#[derive(Clone)]
pub struct QuestionsRepository {
    pool: Pool<Postgres>,
}

impl QuestionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All questions including inactive, in presentation order
    pub async fn list_all(&self) -> AppResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT * FROM checklist_questions ORDER BY sort_order",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Active questions, in presentation order
    pub async fn list_active(&self) -> AppResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            "SELECT * FROM checklist_questions WHERE is_active ORDER BY sort_order",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Active questions explicitly assigned to one equipment unit
    pub async fn list_active_for_unit(&self, equipment_id: Uuid) -> AppResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            r#"
            SELECT q.* FROM checklist_questions q
            JOIN question_assignments a ON a.question_id = q.id
            WHERE a.equipment_id = $1 AND q.is_active
            ORDER BY q.sort_order
            "#,
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a question by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Question> {
        sqlx::query_as::<_, Question>("SELECT * FROM checklist_questions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
    }

    /// Next free sort order (max + 1)
    pub async fn next_sort_order(&self) -> AppResult<i32> {
        let max: Option<i32> =
            sqlx::query_scalar("SELECT MAX(sort_order) FROM checklist_questions")
                .fetch_one(&self.pool)
                .await?;
        Ok(max.unwrap_or(0) + 1)
    }

    /// Create a question at the given sort order
    pub async fn create(
        &self,
        question_text: &str,
        label: &str,
        category: &str,
        sort_order: i32,
    ) -> AppResult<Question> {
        let row = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO checklist_questions (question_text, label, category, sort_order)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(question_text)
        .bind(label)
        .bind(category)
        .bind(sort_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update question text and label
    pub async fn update(
        &self,
        id: Uuid,
        question_text: &str,
        label: Option<&str>,
    ) -> AppResult<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            UPDATE checklist_questions
            SET question_text = $2, label = COALESCE($3, label)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(question_text)
        .bind(label)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
    }

    /// Toggle the active flag (soft delete / restore)
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Question> {
        sqlx::query_as::<_, Question>(
            "UPDATE checklist_questions SET is_active = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question {} not found", id)))
    }

    /// Question IDs assigned to a unit
    pub async fn assignments_for_unit(&self, equipment_id: Uuid) -> AppResult<Vec<Uuid>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT question_id FROM question_assignments WHERE equipment_id = $1",
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    /// Assign a question to a unit. Returns false when the pair already
    /// existed.
    pub async fn assign(&self, equipment_id: Uuid, question_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO question_assignments (equipment_id, question_id)
            VALUES ($1, $2)
            ON CONFLICT (equipment_id, question_id) DO NOTHING
            "#,
        )
        .bind(equipment_id)
        .bind(question_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove an assignment
    pub async fn unassign(&self, equipment_id: Uuid, question_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM question_assignments WHERE equipment_id = $1 AND question_id = $2",
        )
        .bind(equipment_id)
        .bind(question_id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Question {} is not assigned to unit {}",
                question_id, equipment_id
            )));
        }
        Ok(())
    }
}
