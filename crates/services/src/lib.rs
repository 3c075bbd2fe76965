#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_group_service;
pub mod sessions;
pub mod settings_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuestionGroupServiceError, SessionError, SettingsServiceError};
pub use question_group_service::{
    CollectionOrigin, GroupSummary, LoadedCollection, QuestionGroupService,
};
pub use sessions::{
    AnswerResult, QuizSession, QuizSessionService, SessionAnswerResult, SessionEnd,
    SessionProgress,
};
pub use settings_service::SettingsService;
