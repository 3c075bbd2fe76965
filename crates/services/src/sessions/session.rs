use quiz_core::{AnswerOutcome, Question, QuestionStrategy, Score, StrategyChoice};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ANSWER RESULT ─────────────────────────────────────────────────────────────
//

/// Captures the outcome of answering one question within a session.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerResult {
    pub question: Question,
    pub outcome: AnswerOutcome,
    pub score: Score,
    pub is_complete: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass over a question group.
///
/// Each answer marks the current question and advances the strategy in a
/// single step, so callers never drive the strategy's transitions by hand.
#[derive(Debug, Clone)]
pub struct QuizSession {
    strategy: QuestionStrategy,
    answered: usize,
}

impl QuizSession {
    #[must_use]
    pub fn new(strategy: QuestionStrategy) -> Self {
        Self {
            strategy,
            answered: 0,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.strategy.title()
    }

    #[must_use]
    pub fn choice(&self) -> StrategyChoice {
        self.strategy.choice()
    }

    #[must_use]
    pub fn strategy(&self) -> &QuestionStrategy {
        &self.strategy
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.strategy.score()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.strategy.is_complete()
    }

    /// The question awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once every question has been answered.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }
        Ok(self.strategy.current_question()?)
    }

    #[must_use]
    pub fn index_title(&self) -> String {
        self.strategy.question_index_title()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.strategy.len();
        SessionProgress {
            total,
            answered: self.answered,
            remaining: total.saturating_sub(self.answered),
            is_complete: self.is_complete(),
            index_title: self.index_title(),
        }
    }

    /// Record `outcome` for the current question and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn answer(&mut self, outcome: AnswerOutcome) -> Result<AnswerResult, SessionError> {
        let question = self.current_question()?.clone();
        self.strategy.mark(&question, outcome);
        self.answered += 1;
        let has_next = self.strategy.advance_to_next_question();

        Ok(AnswerResult {
            question,
            outcome,
            score: self.strategy.score(),
            is_complete: !has_next,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
