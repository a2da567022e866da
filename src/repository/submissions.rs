//! Checklist submissions repository
//!
//! The submission, its responses and the fail notifications are written in
//! a single transaction: either the whole checklist commits or none of it
//! does, so an orphaned submission with no responses cannot exist.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ResponseStatus,
        notification::NewFailNotification,
        submission::{ChecklistResponse, ResponseWithQuestion, Submission, SubmissionWithEquipment},
    },
};

#[derive(Clone)]
pub struct SubmissionsRepository {
    pool: Pool<Postgres>,
}

impl SubmissionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All submissions with their equipment unit, newest first
    pub async fn list_with_equipment(&self) -> AppResult<Vec<SubmissionWithEquipment>> {
        let rows = sqlx::query_as::<_, SubmissionWithEquipment>(
            r#"
            SELECT s.id, s.badge_number, s.equipment_id, s.submitted_at, s.has_failures,
                   e.name AS equipment_name, e.unit_number
            FROM checklist_submissions s
            JOIN equipment_units e ON e.id = s.equipment_id
            ORDER BY s.submitted_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a submission by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Submission> {
        sqlx::query_as::<_, Submission>("SELECT * FROM checklist_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Submission {} not found", id)))
    }

    /// Responses of one submission with their question text, in
    /// presentation order
    pub async fn responses_for(&self, submission_id: Uuid) -> AppResult<Vec<ResponseWithQuestion>> {
        let rows = sqlx::query_as::<_, ResponseWithQuestion>(
            r#"
            SELECT r.id, r.submission_id, r.question_id, r.status, r.recorded_at,
                   r.admin_notes, q.question_text, q.label, q.category
            FROM checklist_responses r
            JOIN checklist_questions q ON q.id = r.question_id
            WHERE r.submission_id = $1
            ORDER BY q.sort_order
            "#,
        )
        .bind(submission_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Persist one completed checklist: the submission row, one response
    /// row per question, and one notification row per failed response.
    pub async fn create_with_responses(
        &self,
        badge_number: &str,
        equipment_id: Uuid,
        has_failures: bool,
        responses: &[(Uuid, ResponseStatus)],
        notifications: &[NewFailNotification],
    ) -> AppResult<Submission> {
        let mut tx = self.pool.begin().await?;

        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO checklist_submissions (badge_number, equipment_id, has_failures)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(badge_number)
        .bind(equipment_id)
        .bind(has_failures)
        .fetch_one(&mut *tx)
        .await?;

        for (question_id, status) in responses {
            sqlx::query(
                r#"
                INSERT INTO checklist_responses (submission_id, question_id, status)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(submission.id)
            .bind(question_id)
            .bind(status)
            .execute(&mut *tx)
            .await?;
        }

        for n in notifications {
            sqlx::query(
                r#"
                INSERT INTO fail_notifications
                    (submission_id, question_id, badge_number, equipment_name, question_text, comment)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(submission.id)
            .bind(n.question_id)
            .bind(&n.badge_number)
            .bind(&n.equipment_name)
            .bind(&n.question_text)
            .bind(&n.comment)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(submission)
    }

    /// Delete a submission; responses and notifications cascade
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM checklist_submissions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Submission {} not found", id)));
        }
        Ok(())
    }

    /// Set repair notes on one response
    pub async fn update_response_notes(
        &self,
        response_id: Uuid,
        admin_notes: &str,
    ) -> AppResult<ChecklistResponse> {
        sqlx::query_as::<_, ChecklistResponse>(
            "UPDATE checklist_responses SET admin_notes = $2 WHERE id = $1 RETURNING *",
        )
        .bind(response_id)
        .bind(admin_notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Response {} not found", response_id)))
    }
}
