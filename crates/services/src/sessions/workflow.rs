use std::sync::Arc;

use quiz_core::{AnswerOutcome, QuestionGroupCollection, Score};

use super::session::{AnswerResult, QuizSession};
use crate::error::SessionError;
use crate::question_group_service::QuestionGroupService;
use crate::settings_service::SettingsService;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Completed,
    Cancelled,
}

/// Result of answering a single question through the workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub answer: AnswerResult,
    /// Score written to storage when this answer completed the session.
    pub saved_score: Option<Score>,
}

/// Orchestrates session start and score checkpoints.
#[derive(Clone)]
pub struct QuizSessionService {
    question_groups: Arc<QuestionGroupService>,
    settings: Arc<SettingsService>,
}

impl QuizSessionService {
    #[must_use]
    pub fn new(question_groups: Arc<QuestionGroupService>, settings: Arc<SettingsService>) -> Self {
        Self {
            question_groups,
            settings,
        }
    }

    /// Start a new session for the group titled `title`.
    ///
    /// The group's in-memory score is reset; it is written back when the
    /// session completes or is cancelled.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownGroup` if no such group exists, or
    /// `SessionError::Settings` if the strategy cannot be built.
    pub fn start_session(
        &self,
        collection: &mut QuestionGroupCollection,
        title: &str,
    ) -> Result<QuizSession, SessionError> {
        let group = collection
            .get(title)
            .ok_or_else(|| SessionError::UnknownGroup {
                title: title.to_owned(),
            })?;
        let strategy = self.settings.make_strategy(group)?;
        collection.update_score(title, Score::default());

        tracing::info!(
            %title,
            strategy = %strategy.choice(),
            questions = strategy.len(),
            "quiz session started"
        );
        Ok(QuizSession::new(strategy))
    }

    /// Answer the current question and save scores when the session completes.
    ///
    /// `collection` only takes the new score once it has been saved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished,
    /// or a storage error if the completion checkpoint fails.
    pub fn answer_current(
        &self,
        collection: &mut QuestionGroupCollection,
        session: &mut QuizSession,
        outcome: AnswerOutcome,
    ) -> Result<SessionAnswerResult, SessionError> {
        let answer = session.answer(outcome)?;
        let saved_score = if answer.is_complete {
            Some(self.checkpoint(collection, session, SessionEnd::Completed)?)
        } else {
            None
        };

        Ok(SessionAnswerResult {
            answer,
            saved_score,
        })
    }

    /// Stop a session early and save the score accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session already completed (its
    /// score was saved then), or a storage error if the save fails.
    pub fn cancel_session(
        &self,
        collection: &mut QuestionGroupCollection,
        session: &QuizSession,
    ) -> Result<Score, SessionError> {
        if session.is_complete() {
            return Err(SessionError::Completed);
        }
        self.checkpoint(collection, session, SessionEnd::Cancelled)
    }

    fn checkpoint(
        &self,
        collection: &mut QuestionGroupCollection,
        session: &QuizSession,
        end: SessionEnd,
    ) -> Result<Score, SessionError> {
        let score = session.score();
        let mut updated = collection.clone();
        if !updated.update_score(session.title(), score) {
            return Err(SessionError::UnknownGroup {
                title: session.title().to_owned(),
            });
        }
        self.question_groups.save_collection(&updated)?;
        *collection = updated;

        tracing::info!(
            title = %session.title(),
            ?end,
            correct = score.correct_count(),
            incorrect = score.incorrect_count(),
            "quiz session saved"
        );
        Ok(score)
    }
}
