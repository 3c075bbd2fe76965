use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::QuestionGroup;
use crate::strategy::{QuestionStrategy, StrategyError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown question strategy: {raw:?} (expected \"sequential\" or \"random\")")]
pub struct UnknownStrategyChoice {
    pub raw: String,
}

/// Which ordering policy new quiz runs use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyChoice {
    Random,
    #[default]
    Sequential,
}

impl StrategyChoice {
    pub const ALL: [Self; 2] = [Self::Random, Self::Sequential];

    /// Human-readable label for selection lists.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Random => "Random",
            Self::Sequential => "Sequential",
        }
    }

    /// Stable identifier used in settings files and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
        }
    }

    /// Start a new run over `group` using this policy.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::EmptyGroup` if the group has no questions.
    pub fn make_strategy(self, group: &QuestionGroup) -> Result<QuestionStrategy, StrategyError> {
        match self {
            Self::Random => QuestionStrategy::random(group),
            Self::Sequential => QuestionStrategy::sequential(group),
        }
    }
}

impl fmt::Display for StrategyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyChoice {
    type Err = UnknownStrategyChoice;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownStrategyChoice {
                raw: raw.to_owned(),
            })
    }
}
