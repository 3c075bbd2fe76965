use crate::model::ValidationError;

/// A single prompt/answer pair with an optional hint.
///
/// Questions are plain values: two questions with the same text are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    answer: String,
    hint: String,
    prompt: String,
}

impl Question {
    /// Creates a question from already-known fields.
    ///
    /// Stored text is kept exactly as given; only emptiness is checked, so
    /// whitespace-only text is valid.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingAnswer` if the answer is empty, otherwise
    /// `ValidationError::MissingPrompt` if the prompt is empty.
    pub fn new(
        answer: impl Into<String>,
        hint: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let answer = answer.into();
        let prompt = prompt.into();
        if answer.is_empty() {
            return Err(ValidationError::MissingAnswer);
        }
        if prompt.is_empty() {
            return Err(ValidationError::MissingPrompt);
        }

        Ok(Self {
            answer,
            hint: hint.into(),
            prompt,
        })
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Hint text, empty when the question has none.
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn has_hint(&self) -> bool {
        !self.hint.is_empty()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
