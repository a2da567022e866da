//! Question resolution and checklist submission workflow

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::{
    config::{BadgePolicy, ChecklistConfig, QuestionMode},
    error::{AppError, AppResult},
    models::{
        enums::ResponseStatus,
        notification::NewFailNotification,
        question::Question,
        submission::{
            ChecklistResponse, ResponseWithQuestion, SubmitChecklist, SubmitResponse, Submission,
            SubmissionWithEquipment,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ChecklistService {
    repository: Repository,
    config: ChecklistConfig,
}

impl ChecklistService {
    pub fn new(repository: Repository, config: ChecklistConfig) -> Self {
        Self { repository, config }
    }

    /// The ordered question list applicable to one equipment unit, under
    /// the configured resolution mode.
    ///
    /// In per-equipment mode a unit with zero assignments yields an empty
    /// list; there is deliberately no fallback to the global set.
    pub async fn questions_for_unit(&self, equipment_id: Uuid) -> AppResult<Vec<Question>> {
        match self.config.question_mode {
            QuestionMode::Global => self.repository.questions.list_active().await,
            QuestionMode::PerEquipment => {
                self.repository.equipment.get_active_by_id(equipment_id).await?;
                self.repository.questions.list_active_for_unit(equipment_id).await
            }
        }
    }

    /// Validate and persist one completed checklist.
    ///
    /// The client is untrusted, so every precondition is re-checked here:
    /// badge (under the enforce policy), equipment existence, exact
    /// coverage of the in-scope question set, and fail comments when the
    /// comment gate is on. The submission, its responses and the fail
    /// notifications then commit in one transaction.
    pub async fn submit(&self, payload: SubmitChecklist) -> AppResult<Submission> {
        let badge = payload.badge_number.trim();
        if badge.is_empty() {
            return Err(AppError::Validation("Badge number is required".to_string()));
        }
        if self.config.badge_policy == BadgePolicy::Enforce {
            let driver = self.repository.drivers.find_active_by_badge(badge).await?;
            if driver.is_none() {
                return Err(AppError::BadgeNotRecognized(format!(
                    "Badge {} does not match an active qualified driver",
                    badge
                )));
            }
        }

        let equipment = self
            .repository
            .equipment
            .get_active_by_id(payload.equipment_id)
            .await?;

        let questions = self.questions_for_unit(equipment.id).await?;
        if questions.is_empty() {
            return Err(AppError::BusinessRule(
                "No questions assigned to this unit, contact an administrator".to_string(),
            ));
        }

        check_coverage(&questions, &payload.responses)?;
        if self.config.require_fail_comments {
            check_fail_comments(&payload.responses)?;
        }

        let has_failures = payload
            .responses
            .iter()
            .any(|r| r.status == ResponseStatus::Fail);

        let (responses, notifications) =
            build_rows(&questions, &payload.responses, badge, &equipment.name);

        let submission = self
            .repository
            .submissions
            .create_with_responses(badge, equipment.id, has_failures, &responses, &notifications)
            .await?;

        if has_failures {
            tracing::warn!(
                "Checklist {} on {} submitted with {} failed item(s)",
                submission.id,
                equipment.unit_number,
                notifications.len()
            );
        }

        Ok(submission)
    }

    /// All submissions with their equipment unit, newest first
    pub async fn list_submissions(&self) -> AppResult<Vec<SubmissionWithEquipment>> {
        self.repository.submissions.list_with_equipment().await
    }

    /// Responses of one submission with their question text
    pub async fn submission_responses(
        &self,
        submission_id: Uuid,
    ) -> AppResult<Vec<ResponseWithQuestion>> {
        self.repository.submissions.get_by_id(submission_id).await?;
        self.repository.submissions.responses_for(submission_id).await
    }

    pub async fn delete_submission(&self, id: Uuid) -> AppResult<()> {
        self.repository.submissions.delete(id).await
    }

    /// Set repair notes on one response
    pub async fn update_response_notes(
        &self,
        response_id: Uuid,
        admin_notes: &str,
    ) -> AppResult<ChecklistResponse> {
        self.repository
            .submissions
            .update_response_notes(response_id, admin_notes)
            .await
    }
}

/// The response set must cover the in-scope question set exactly: no
/// duplicates, no unknown questions, no missing answers.
fn check_coverage(questions: &[Question], responses: &[SubmitResponse]) -> AppResult<()> {
    let in_scope: HashSet<Uuid> = questions.iter().map(|q| q.id).collect();

    let mut seen = HashSet::new();
    for r in responses {
        if !in_scope.contains(&r.question_id) {
            return Err(AppError::Validation(format!(
                "Question {} is not on this checklist",
                r.question_id
            )));
        }
        if !seen.insert(r.question_id) {
            return Err(AppError::Validation(format!(
                "Duplicate response for question {}",
                r.question_id
            )));
        }
    }

    let missing = in_scope.len() - seen.len();
    if missing > 0 {
        return Err(AppError::IncompleteChecklist(format!(
            "{} question(s) not answered",
            missing
        )));
    }
    Ok(())
}

/// Every fail response must carry a non-empty trimmed comment
fn check_fail_comments(responses: &[SubmitResponse]) -> AppResult<()> {
    let uncommented = responses.iter().any(|r| {
        r.status == ResponseStatus::Fail
            && r.comment.as_deref().map_or(true, |c| c.trim().is_empty())
    });
    if uncommented {
        return Err(AppError::MissingFailComment(
            "Please provide comments for all failed items".to_string(),
        ));
    }
    Ok(())
}

/// Order the response rows by question sort order and synthesize one
/// notification per failed response, snapshotting badge, equipment name
/// and question text at commit time.
fn build_rows(
    questions: &[Question],
    responses: &[SubmitResponse],
    badge_number: &str,
    equipment_name: &str,
) -> (Vec<(Uuid, ResponseStatus)>, Vec<NewFailNotification>) {
    let by_question: HashMap<Uuid, &SubmitResponse> =
        responses.iter().map(|r| (r.question_id, r)).collect();

    let mut rows = Vec::with_capacity(questions.len());
    let mut notifications = Vec::new();

    for question in questions {
        // check_coverage guarantees one response per question
        let Some(response) = by_question.get(&question.id) else {
            continue;
        };
        rows.push((question.id, response.status));

        if response.status == ResponseStatus::Fail {
            notifications.push(NewFailNotification {
                question_id: question.id,
                badge_number: badge_number.to_string(),
                equipment_name: equipment_name.to_string(),
                question_text: question.question_text.clone(),
                comment: response
                    .comment
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
            });
        }
    }

    (rows, notifications)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question(n: i32) -> Question {
        Question {
            id: Uuid::new_v4(),
            question_text: format!("Inspection item {}", n),
            category: "General".to_string(),
            label: format!("Q{}", n),
            sort_order: n,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn response(question_id: Uuid, status: ResponseStatus, comment: Option<&str>) -> SubmitResponse {
        SubmitResponse {
            question_id,
            status,
            comment: comment.map(str::to_string),
        }
    }

    #[test]
    fn coverage_accepts_exact_answer_set() {
        let questions = vec![question(1), question(2)];
        let responses = vec![
            response(questions[0].id, ResponseStatus::Pass, None),
            response(questions[1].id, ResponseStatus::Na, None),
        ];
        assert!(check_coverage(&questions, &responses).is_ok());
    }

    #[test]
    fn coverage_rejects_missing_answer() {
        let questions = vec![question(1), question(2)];
        let responses = vec![response(questions[0].id, ResponseStatus::Pass, None)];
        let err = check_coverage(&questions, &responses).unwrap_err();
        assert!(matches!(err, AppError::IncompleteChecklist(_)));
    }

    #[test]
    fn coverage_rejects_unknown_question() {
        let questions = vec![question(1)];
        let responses = vec![
            response(questions[0].id, ResponseStatus::Pass, None),
            response(Uuid::new_v4(), ResponseStatus::Pass, None),
        ];
        let err = check_coverage(&questions, &responses).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn coverage_rejects_duplicate_response() {
        let questions = vec![question(1), question(2)];
        let responses = vec![
            response(questions[0].id, ResponseStatus::Pass, None),
            response(questions[0].id, ResponseStatus::Fail, Some("x")),
            response(questions[1].id, ResponseStatus::Pass, None),
        ];
        let err = check_coverage(&questions, &responses).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn fail_comment_gate() {
        let q = Uuid::new_v4();
        assert!(check_fail_comments(&[response(q, ResponseStatus::Fail, None)]).is_err());
        assert!(check_fail_comments(&[response(q, ResponseStatus::Fail, Some("  "))]).is_err());
        assert!(check_fail_comments(&[response(q, ResponseStatus::Fail, Some("leak"))]).is_ok());
        assert!(check_fail_comments(&[response(q, ResponseStatus::Pass, None)]).is_ok());
    }

    #[test]
    fn rows_follow_sort_order_and_fails_become_notifications() {
        let questions = vec![question(1), question(2), question(3)];
        // responses arrive out of order
        let responses = vec![
            response(questions[2].id, ResponseStatus::Pass, None),
            response(questions[0].id, ResponseStatus::Pass, None),
            response(questions[1].id, ResponseStatus::Fail, Some(" chain worn ")),
        ];

        let (rows, notifications) = build_rows(&questions, &responses, "4455", "Forklift 1");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].0, questions[0].id);
        assert_eq!(rows[1].0, questions[1].id);
        assert_eq!(rows[2].0, questions[2].id);

        assert_eq!(notifications.len(), 1);
        let n = &notifications[0];
        assert_eq!(n.question_id, questions[1].id);
        assert_eq!(n.badge_number, "4455");
        assert_eq!(n.equipment_name, "Forklift 1");
        assert_eq!(n.question_text, questions[1].question_text);
        assert_eq!(n.comment.as_deref(), Some("chain worn"));
    }

    #[test]
    fn all_pass_produces_no_notifications() {
        let questions = vec![question(1), question(2)];
        let responses = vec![
            response(questions[0].id, ResponseStatus::Pass, None),
            response(questions[1].id, ResponseStatus::Pass, None),
        ];
        let (rows, notifications) = build_rows(&questions, &responses, "4455", "Forklift 1");
        assert_eq!(rows.len(), 2);
        assert!(notifications.is_empty());
    }
}
