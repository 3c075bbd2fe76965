//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::{StrategyError, ValidationError};
use storage::repository::StorageError;

/// Errors emitted by `QuestionGroupService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionGroupServiceError {
    /// The bundled seed is unusable. Startup cannot continue.
    #[error("bundled question groups are unusable: {0}")]
    FatalConfiguration(#[source] StorageError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsServiceError {
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by quiz sessions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question group titled {title:?}")]
    UnknownGroup { title: String },
    #[error("session already completed")]
    Completed,
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    #[error(transparent)]
    Settings(#[from] SettingsServiceError),
    #[error(transparent)]
    QuestionGroups(#[from] QuestionGroupServiceError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
