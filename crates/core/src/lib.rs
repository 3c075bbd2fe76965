#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod strategy;

pub use error::Error;
pub use model::{
    AnswerOutcome, Question, QuestionBuilder, QuestionGroup, QuestionGroupBuilder,
    QuestionGroupCollection, Score, ValidationError,
};
pub use strategy::{QuestionStrategy, StrategyChoice, StrategyError, StrategyState};
