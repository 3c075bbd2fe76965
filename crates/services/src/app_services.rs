use std::path::PathBuf;
use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::question_group_service::QuestionGroupService;
use crate::sessions::QuizSessionService;
use crate::settings_service::SettingsService;

/// Assembles app-facing services over one storage backend.
///
/// Built explicitly and handed to the UI layer, so tests can swap in
/// in-memory storage or a different seed.
#[derive(Clone)]
pub struct AppServices {
    question_groups: Arc<QuestionGroupService>,
    settings: Arc<SettingsService>,
    sessions: Arc<QuizSessionService>,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(storage: &Storage, collection_key: impl Into<String>) -> Self {
        let question_groups = Arc::new(QuestionGroupService::new(
            collection_key,
            Arc::clone(&storage.question_groups),
            Arc::clone(&storage.seed),
        ));
        let settings = Arc::new(SettingsService::new(Arc::clone(&storage.settings)));
        let sessions = Arc::new(QuizSessionService::new(
            Arc::clone(&question_groups),
            Arc::clone(&settings),
        ));

        Self {
            question_groups,
            settings,
            sessions,
        }
    }

    /// Build services backed by files under `root`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the storage directory cannot be prepared.
    pub fn new_files(
        root: impl Into<PathBuf>,
        collection_key: impl Into<String>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::files(root)?;
        Ok(Self::from_storage(&storage, collection_key))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_storage(&Storage::in_memory(), storage::DEFAULT_COLLECTION_KEY)
    }

    #[must_use]
    pub fn question_groups(&self) -> Arc<QuestionGroupService> {
        Arc::clone(&self.question_groups)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<QuizSessionService> {
        Arc::clone(&self.sessions)
    }
}
