use thiserror::Error;

use crate::model::{Question, QuestionGroup, Score};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// User-fixable problems found while building questions and groups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("question answer cannot be empty")]
    MissingAnswer,

    #[error("question prompt cannot be empty")]
    MissingPrompt,

    #[error("question group title cannot be empty")]
    MissingTitle,

    #[error("question group must contain at least one question")]
    MissingQuestions,

    #[error("a question group titled {title:?} already exists")]
    DuplicateTitle { title: String },
}

//
// ─── QUESTION BUILDER ──────────────────────────────────────────────────────────
//

/// Mutable staging area for a single question.
///
/// Fields are edited freely; nothing is checked until [`QuestionBuilder::build`].
/// A failed build leaves the builder untouched so it can be corrected and retried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBuilder {
    pub answer: String,
    pub hint: String,
    pub prompt: String,
}

impl QuestionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Validate the staged fields and produce a [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingAnswer` if the answer is empty, otherwise
    /// `ValidationError::MissingPrompt` if the prompt is empty.
    pub fn build(&self) -> Result<Question, ValidationError> {
        Question::new(self.answer.clone(), self.hint.clone(), self.prompt.clone())
    }
}

//
// ─── GROUP BUILDER ─────────────────────────────────────────────────────────────
//

/// Mutable staging area for a question group and its questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionGroupBuilder {
    pub title: String,
    pub questions: Vec<QuestionBuilder>,
}

impl QuestionGroupBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_question(mut self, question: QuestionBuilder) -> Self {
        self.questions.push(question);
        self
    }

    /// Append an empty question builder and return it for editing.
    pub fn add_new_question(&mut self) -> &mut QuestionBuilder {
        self.questions.push(QuestionBuilder::new());
        let last = self.questions.len() - 1;
        &mut self.questions[last]
    }

    /// Remove the staged question at `index`, returning it if it existed.
    pub fn remove_question(&mut self, index: usize) -> Option<QuestionBuilder> {
        (index < self.questions.len()).then(|| self.questions.remove(index))
    }

    /// Validate the group and every staged question, in order.
    ///
    /// The resulting group starts with an empty score.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingTitle` or `ValidationError::MissingQuestions`
    /// for group-level problems, otherwise the first error raised by a child
    /// builder in staging order.
    pub fn build(&self) -> Result<QuestionGroup, ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.questions.is_empty() {
            return Err(ValidationError::MissingQuestions);
        }

        let questions = self
            .questions
            .iter()
            .map(QuestionBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;

        QuestionGroup::new(self.title.clone(), questions, Score::default())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
