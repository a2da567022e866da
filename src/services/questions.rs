//! Checklist questions and assignments service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::question::{CreateQuestion, Question, UpdateQuestion},
    repository::Repository,
};

#[derive(Clone)]
pub struct QuestionsService {
    repository: Repository,
}

impl QuestionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All questions including inactive, for the admin list
    pub async fn list_all(&self) -> AppResult<Vec<Question>> {
        self.repository.questions.list_all().await
    }

    /// New questions land at the end of the checklist with label "Q{n}"
    /// and category "General" unless given
    pub async fn create(&self, data: &CreateQuestion) -> AppResult<Question> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let sort_order = self.repository.questions.next_sort_order().await?;
        let label = data
            .label
            .clone()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| format!("Q{}", sort_order));
        let category = data
            .category
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| "General".to_string());
        self.repository
            .questions
            .create(data.question_text.trim(), &label, &category, sort_order)
            .await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateQuestion) -> AppResult<Question> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository
            .questions
            .update(id, data.question_text.trim(), data.label.as_deref())
            .await
    }

    /// Soft toggle; questions are never hard-deleted
    pub async fn set_active(&self, id: Uuid, is_active: bool) -> AppResult<Question> {
        self.repository.questions.set_active(id, is_active).await
    }

    pub async fn assignments_for_unit(&self, equipment_id: Uuid) -> AppResult<Vec<Uuid>> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.questions.assignments_for_unit(equipment_id).await
    }

    pub async fn assign(&self, equipment_id: Uuid, question_id: Uuid) -> AppResult<()> {
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.questions.get_by_id(question_id).await?;
        let inserted = self.repository.questions.assign(equipment_id, question_id).await?;
        if !inserted {
            return Err(AppError::Conflict(
                "Question is already assigned to this unit".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn unassign(&self, equipment_id: Uuid, question_id: Uuid) -> AppResult<()> {
        self.repository.questions.unassign(equipment_id, question_id).await
    }
}
