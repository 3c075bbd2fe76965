//! Question progression: which question is shown next, and when a run is over.

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::{AnswerOutcome, Question, QuestionGroup, Score};

mod choice;

pub use choice::{StrategyChoice, UnknownStrategyChoice};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StrategyError {
    #[error("question group {title:?} has no questions")]
    EmptyGroup { title: String },

    #[error("question index {index} is out of range for {count} questions")]
    OutOfRange { index: usize, count: usize },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Observable position of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyState {
    /// Showing the question at this zero-based position.
    InProgress(usize),
    /// Every question has been passed; terminal.
    Complete,
}

//
// ─── STRATEGY ──────────────────────────────────────────────────────────────────
//

/// Walks a fixed ordering of a group's questions and tallies answers.
///
/// All variants share this state machine; they differ only in how the
/// question order is chosen at construction time. The order never changes
/// afterwards.
///
/// ```
/// # use quiz_core::{QuestionBuilder, QuestionGroupBuilder, QuestionStrategy};
/// let group = QuestionGroupBuilder::new()
///     .with_title("Colors")
///     .with_question(QuestionBuilder::new().with_prompt("rojo").with_answer("red"))
///     .with_question(QuestionBuilder::new().with_prompt("azul").with_answer("blue"))
///     .build()?;
///
/// let mut strategy = QuestionStrategy::sequential(&group)?;
/// assert_eq!(strategy.question_index_title(), "1/2");
/// let question = strategy.current_question()?.clone();
/// strategy.mark_correct(&question);
/// assert!(strategy.advance_to_next_question());
/// assert!(!strategy.advance_to_next_question());
/// assert!(strategy.is_complete());
/// # Ok::<(), quiz_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuestionStrategy {
    choice: StrategyChoice,
    title: String,
    questions: Vec<Question>,
    index: usize,
    score: Score,
}

impl QuestionStrategy {
    /// Presents the group's questions in their stored order.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::EmptyGroup` if the group has no questions.
    pub fn sequential(group: &QuestionGroup) -> Result<Self, StrategyError> {
        Self::with_ordering(
            StrategyChoice::Sequential,
            group.title(),
            group.questions(),
            |_| {},
        )
    }

    /// Presents the group's questions in a fresh uniformly random order.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::EmptyGroup` if the group has no questions.
    pub fn random(group: &QuestionGroup) -> Result<Self, StrategyError> {
        Self::with_ordering(
            StrategyChoice::Random,
            group.title(),
            group.questions(),
            |questions| questions.shuffle(&mut rand::rng()),
        )
    }

    /// Builds a strategy whose order is produced by `order`, which receives a
    /// copy of `questions` and may only permute it.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::EmptyGroup` if `questions` is empty.
    pub fn with_ordering<F>(
        choice: StrategyChoice,
        title: impl Into<String>,
        questions: &[Question],
        order: F,
    ) -> Result<Self, StrategyError>
    where
        F: FnOnce(&mut [Question]),
    {
        let title = title.into();
        if questions.is_empty() {
            return Err(StrategyError::EmptyGroup { title });
        }

        let mut ordered = questions.to_vec();
        order(&mut ordered);

        Ok(Self {
            choice,
            title,
            questions: ordered,
            index: 0,
            score: Score::default(),
        })
    }

    #[must_use]
    pub fn choice(&self) -> StrategyChoice {
        self.choice
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Questions in presentation order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> StrategyState {
        if self.index < self.questions.len() {
            StrategyState::InProgress(self.index)
        } else {
            StrategyState::Complete
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == StrategyState::Complete
    }

    /// The question currently on screen.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::OutOfRange` once the strategy is complete.
    pub fn current_question(&self) -> Result<&Question, StrategyError> {
        self.questions
            .get(self.index)
            .ok_or(StrategyError::OutOfRange {
                index: self.index,
                count: self.questions.len(),
            })
    }

    /// Records a correct answer for `question`, which must be the current one.
    pub fn mark_correct(&mut self, question: &Question) {
        self.mark(question, AnswerOutcome::Correct);
    }

    /// Records an incorrect answer for `question`, which must be the current one.
    pub fn mark_incorrect(&mut self, question: &Question) {
        self.mark(question, AnswerOutcome::Incorrect);
    }

    pub fn mark(&mut self, question: &Question, outcome: AnswerOutcome) {
        debug_assert_eq!(
            self.questions.get(self.index),
            Some(question),
            "marked question is not the current question"
        );
        self.score = self.score.apply(outcome);
    }

    /// Moves to the next question and reports whether one exists.
    ///
    /// Once this returns `false` the strategy is complete and stays complete.
    pub fn advance_to_next_question(&mut self) -> bool {
        if self.index < self.questions.len() {
            self.index += 1;
        }
        self.index < self.questions.len()
    }

    /// One-based position label such as `"2/5"`.
    ///
    /// Once complete the position is one past the last question, e.g. `"6/5"`.
    #[must_use]
    pub fn question_index_title(&self) -> String {
        format!("{}/{}", self.index + 1, self.questions.len())
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.score.correct_count()
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.score.incorrect_count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
