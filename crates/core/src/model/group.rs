use crate::model::{Question, Score, ValidationError};

/// A titled, non-empty set of questions plus its score.
///
/// Only the score changes after construction; the title and question list are
/// fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionGroup {
    title: String,
    questions: Vec<Question>,
    score: Score,
}

impl QuestionGroup {
    /// Creates a group from validated questions.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingTitle` if the title is empty, or
    /// `ValidationError::MissingQuestions` if `questions` is empty.
    pub fn new(
        title: impl Into<String>,
        questions: Vec<Question>,
        score: Score,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if questions.is_empty() {
            return Err(ValidationError::MissingQuestions);
        }

        Ok(Self {
            title,
            questions,
            score,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn set_score(&mut self, score: Score) {
        self.score = score;
    }
}
