//! In-progress checklist session (response accumulator)
//!
//! One `ChecklistSession` holds the answers of a single operator working
//! through one checklist. It is created from the resolved question list,
//! mutated by the operator's taps, and reset on submission success or
//! equipment switch. The submission handler also rebuilds one server-side
//! from the same question list to re-check an untrusted client payload.

use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ResponseStatus,
        question::Question,
        submission::{SubmitChecklist, SubmitResponse},
    },
};

/// How the operator UI drives answer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    /// Pass/fail/na set directly; setting the current status again clears
    /// the answer
    Tristate,
    /// One button cycling unanswered -> pass -> fail -> unanswered, with a
    /// mandatory comment while in fail
    ToggleCycle,
}

/// Current answer state of one question
#[derive(Debug, Clone, Default)]
pub struct Answer {
    pub status: Option<ResponseStatus>,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct ChecklistSession {
    questions: Vec<Question>,
    answers: HashMap<Uuid, Answer>,
    mode: AnswerMode,
}

impl ChecklistSession {
    pub fn new(questions: Vec<Question>, mode: AnswerMode) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
            mode,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn mode(&self) -> AnswerMode {
        self.mode
    }

    pub fn status(&self, question_id: Uuid) -> Option<ResponseStatus> {
        self.answers.get(&question_id).and_then(|a| a.status)
    }

    pub fn comment(&self, question_id: Uuid) -> &str {
        self.answers
            .get(&question_id)
            .map(|a| a.comment.as_str())
            .unwrap_or("")
    }

    /// Set a status directly. Setting the current status again clears the
    /// answer. Any status other than fail clears the comment: comments are
    /// fail-only metadata.
    pub fn set_status(&mut self, question_id: Uuid, status: ResponseStatus) -> AppResult<()> {
        let answer = self.answer_mut(question_id)?;
        if answer.status == Some(status) {
            answer.status = None;
            answer.comment.clear();
        } else {
            answer.status = Some(status);
            if status != ResponseStatus::Fail {
                answer.comment.clear();
            }
        }
        Ok(())
    }

    /// One tap of the toggle-cycle button: unanswered -> pass -> fail ->
    /// unanswered. Leaving fail clears the comment.
    pub fn tap(&mut self, question_id: Uuid) -> AppResult<()> {
        let answer = self.answer_mut(question_id)?;
        answer.status = match answer.status {
            None => Some(ResponseStatus::Pass),
            Some(ResponseStatus::Pass) => Some(ResponseStatus::Fail),
            Some(ResponseStatus::Fail) | Some(ResponseStatus::Na) => None,
        };
        if answer.status != Some(ResponseStatus::Fail) {
            answer.comment.clear();
        }
        Ok(())
    }

    /// Record the free-text comment for a failed question
    pub fn set_comment(&mut self, question_id: Uuid, comment: &str) -> AppResult<()> {
        let answer = self.answer_mut(question_id)?;
        answer.comment = comment.to_string();
        Ok(())
    }

    /// Every in-scope question has a status
    pub fn all_answered(&self) -> bool {
        self.questions
            .iter()
            .all(|q| self.status(q.id).is_some())
    }

    /// Every failed question carries a non-empty trimmed comment
    pub fn fails_have_comments(&self) -> bool {
        self.questions.iter().all(|q| {
            self.status(q.id) != Some(ResponseStatus::Fail)
                || !self.comment(q.id).trim().is_empty()
        })
    }

    /// Validate the session for submission. The comment gate only applies
    /// in the comment-gated product variant.
    pub fn validate(&self, comment_gate: bool) -> AppResult<()> {
        if !self.all_answered() {
            let missing = self
                .questions
                .iter()
                .filter(|q| self.status(q.id).is_none())
                .count();
            return Err(AppError::IncompleteChecklist(format!(
                "{} question(s) not answered",
                missing
            )));
        }
        if comment_gate && !self.fails_have_comments() {
            return Err(AppError::MissingFailComment(
                "Please provide comments for all failed items".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the submit request from the accumulated answers. The session
    /// must be valid first.
    pub fn submit_payload(
        &self,
        badge_number: &str,
        equipment_id: Uuid,
    ) -> AppResult<SubmitChecklist> {
        self.validate(self.mode == AnswerMode::ToggleCycle)?;
        let responses = self
            .questions
            .iter()
            .map(|q| {
                let comment = self.comment(q.id).trim();
                SubmitResponse {
                    question_id: q.id,
                    // validate() guarantees a status for every question
                    status: self.status(q.id).unwrap_or(ResponseStatus::Na),
                    comment: (!comment.is_empty()).then(|| comment.to_string()),
                }
            })
            .collect();
        Ok(SubmitChecklist {
            badge_number: badge_number.to_string(),
            equipment_id,
            responses,
        })
    }

    /// Clear all answers, keeping the question list
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    fn answer_mut(&mut self, question_id: Uuid) -> AppResult<&mut Answer> {
        if !self.questions.iter().any(|q| q.id == question_id) {
            return Err(AppError::Validation(format!(
                "Question {} is not on this checklist",
                question_id
            )));
        }
        Ok(self.answers.entry(question_id).or_default())
    }
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

    fn session(n: usize, mode: AnswerMode) -> ChecklistSession {
        let questions = (1..=n as i32).map(question).collect();
        ChecklistSession::new(questions, mode)
    }

    #[test]
    fn toggle_cycle_walks_pass_fail_unanswered() {
        let mut s = session(1, AnswerMode::ToggleCycle);
        let q = s.questions()[0].id;

        assert_eq!(s.status(q), None);
        s.tap(q).unwrap();
        assert_eq!(s.status(q), Some(ResponseStatus::Pass));
        s.tap(q).unwrap();
        assert_eq!(s.status(q), Some(ResponseStatus::Fail));
        s.tap(q).unwrap();
        assert_eq!(s.status(q), None);
    }

    #[test]
    fn leaving_fail_clears_comment() {
        let mut s = session(1, AnswerMode::ToggleCycle);
        let q = s.questions()[0].id;

        s.tap(q).unwrap();
        s.tap(q).unwrap();
        s.set_comment(q, "hydraulic leak under mast").unwrap();
        assert_eq!(s.comment(q), "hydraulic leak under mast");

        // fail -> unanswered drops the comment
        s.tap(q).unwrap();
        assert_eq!(s.comment(q), "");
    }

    #[test]
    fn non_fail_status_clears_comment() {
        let mut s = session(1, AnswerMode::Tristate);
        let q = s.questions()[0].id;

        s.set_status(q, ResponseStatus::Fail).unwrap();
        s.set_comment(q, "worn tire").unwrap();
        s.set_status(q, ResponseStatus::Pass).unwrap();
        assert_eq!(s.comment(q), "");
        assert_eq!(s.status(q), Some(ResponseStatus::Pass));
    }

    #[test]
    fn tristate_repeat_clears_answer() {
        let mut s = session(1, AnswerMode::Tristate);
        let q = s.questions()[0].id;

        s.set_status(q, ResponseStatus::Na).unwrap();
        assert_eq!(s.status(q), Some(ResponseStatus::Na));
        s.set_status(q, ResponseStatus::Na).unwrap();
        assert_eq!(s.status(q), None);
    }

    #[test]
    fn unknown_question_is_rejected() {
        let mut s = session(1, AnswerMode::Tristate);
        let err = s.set_status(Uuid::new_v4(), ResponseStatus::Pass).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn validate_requires_all_answers() {
        let mut s = session(3, AnswerMode::ToggleCycle);
        let q1 = s.questions()[0].id;
        s.tap(q1).unwrap();

        let err = s.validate(true).unwrap_err();
        assert!(matches!(err, AppError::IncompleteChecklist(_)));
        assert!(!s.all_answered());
    }

    #[test]
    fn comment_gate_blocks_uncommented_fail() {
        let mut s = session(2, AnswerMode::ToggleCycle);
        let q1 = s.questions()[0].id;
        let q2 = s.questions()[1].id;

        s.tap(q1).unwrap(); // pass
        s.tap(q2).unwrap();
        s.tap(q2).unwrap(); // fail, no comment

        let err = s.validate(true).unwrap_err();
        assert!(matches!(err, AppError::MissingFailComment(_)));

        // whitespace does not satisfy the gate
        s.set_comment(q2, "   ").unwrap();
        assert!(s.validate(true).is_err());

        s.set_comment(q2, "brake pedal soft").unwrap();
        assert!(s.validate(true).is_ok());

        // without the gate, the uncommented fail would have passed
        s.set_comment(q2, "").unwrap();
        assert!(s.validate(false).is_ok());
    }

    #[test]
    fn payload_covers_every_question_in_order() {
        let mut s = session(3, AnswerMode::ToggleCycle);
        let ids: Vec<Uuid> = s.questions().iter().map(|q| q.id).collect();

        s.tap(ids[0]).unwrap(); // pass
        s.tap(ids[1]).unwrap();
        s.tap(ids[1]).unwrap(); // fail
        s.set_comment(ids[1], "horn not working").unwrap();
        s.tap(ids[2]).unwrap(); // pass

        let payload = s.submit_payload("4455", Uuid::new_v4()).unwrap();
        assert_eq!(payload.badge_number, "4455");
        assert_eq!(payload.responses.len(), 3);
        let by_id: Vec<Uuid> = payload.responses.iter().map(|r| r.question_id).collect();
        assert_eq!(by_id, ids);
        assert_eq!(payload.responses[1].status, ResponseStatus::Fail);
        assert_eq!(payload.responses[1].comment.as_deref(), Some("horn not working"));
        assert_eq!(payload.responses[0].comment, None);
    }

    #[test]
    fn reset_clears_answers_but_keeps_questions() {
        let mut s = session(2, AnswerMode::Tristate);
        let q1 = s.questions()[0].id;
        s.set_status(q1, ResponseStatus::Pass).unwrap();

        s.reset();
        assert_eq!(s.status(q1), None);
        assert_eq!(s.questions().len(), 2);
    }
}
