/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

/// Running correct/incorrect tally for a question group.
///
/// `Score` is an immutable value; [`Score::apply`] returns the next score.
/// The percentage is derived from the counts on every read, so it can never lag
/// behind them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct_count: u32,
    incorrect_count: u32,
}

impl Score {
    #[must_use]
    pub fn new(correct_count: u32, incorrect_count: u32) -> Self {
        Self {
            correct_count,
            incorrect_count,
        }
    }

    /// Returns the score after recording `outcome`.
    #[must_use]
    pub fn apply(self, outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Correct => Self {
                correct_count: self.correct_count.saturating_add(1),
                ..self
            },
            AnswerOutcome::Incorrect => Self {
                incorrect_count: self.incorrect_count.saturating_add(1),
                ..self
            },
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect_count
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.correct_count) + u64::from(self.incorrect_count)
    }

    /// Fraction of answers that were correct, in `[0, 1]`.
    ///
    /// Defined as `0.0` when nothing has been answered yet.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn running_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / total as f64
    }
}
