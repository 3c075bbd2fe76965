use thiserror::Error;

use crate::model::ValidationError;
use crate::strategy::StrategyError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Strategy(#[from] StrategyError),
}
