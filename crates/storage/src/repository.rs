use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use quiz_core::{QuestionGroupCollection, StrategyChoice};
use thiserror::Error;

use crate::file::FileRepository;
use crate::seed::StaticSeed;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("bundled seed data is corrupt: {0}")]
    CorruptSeed(String),

    #[error("storage lock poisoned: {0}")]
    Poisoned(String),
}

impl StorageError {
    /// True when stored bytes exist but cannot be turned back into domain values.
    #[must_use]
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::Serialization(_) | Self::InvalidRecord(_))
    }
}

pub trait QuestionGroupRepository: Send + Sync {
    /// Load the user collection stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been saved under that key yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` or `StorageError::InvalidRecord` if
    /// the stored data is corrupt, or other storage errors.
    fn load_collection(&self, key: &str)
    -> Result<Option<QuestionGroupCollection>, StorageError>;

    /// Replace the collection stored under `key` as a single atomic step.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the collection cannot be stored; the previous
    /// contents stay intact in that case.
    fn save_collection(
        &self,
        key: &str,
        collection: &QuestionGroupCollection,
    ) -> Result<(), StorageError>;
}

pub trait SettingsRepository: Send + Sync {
    /// Fetch the persisted strategy choice, if one was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on read or decode failures.
    fn get_strategy_choice(&self) -> Result<Option<StrategyChoice>, StorageError>;

    /// Persist the strategy choice.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    fn save_strategy_choice(&self, choice: StrategyChoice) -> Result<(), StorageError>;
}

/// Read-only source of first-run question groups.
pub trait SeedSource: Send + Sync {
    /// Decode the seed collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CorruptSeed` if the seed cannot be decoded.
    fn load_seed(&self) -> Result<QuestionGroupCollection, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    collections: Arc<Mutex<HashMap<String, QuestionGroupCollection>>>,
    strategy: Arc<Mutex<Option<StrategyChoice>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Poisoned(e.to_string())
}

impl QuestionGroupRepository for InMemoryRepository {
    fn load_collection(
        &self,
        key: &str,
    ) -> Result<Option<QuestionGroupCollection>, StorageError> {
        let guard = self.collections.lock().map_err(poisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn save_collection(
        &self,
        key: &str,
        collection: &QuestionGroupCollection,
    ) -> Result<(), StorageError> {
        let mut guard = self.collections.lock().map_err(poisoned)?;
        guard.insert(key.to_owned(), collection.clone());
        Ok(())
    }
}

impl SettingsRepository for InMemoryRepository {
    fn get_strategy_choice(&self) -> Result<Option<StrategyChoice>, StorageError> {
        let guard = self.strategy.lock().map_err(poisoned)?;
        Ok(*guard)
    }

    fn save_strategy_choice(&self, choice: StrategyChoice) -> Result<(), StorageError> {
        let mut guard = self.strategy.lock().map_err(poisoned)?;
        *guard = Some(choice);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub question_groups: Arc<dyn QuestionGroupRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub seed: Arc<dyn SeedSource>,
}

impl Storage {
    /// In-memory storage seeded from the bundled question groups.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::in_memory_with_seed(StaticSeed::bundled())
    }

    #[must_use]
    pub fn in_memory_with_seed(seed: impl SeedSource + 'static) -> Self {
        let repo = InMemoryRepository::new();
        let question_groups: Arc<dyn QuestionGroupRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self {
            question_groups,
            settings,
            seed: Arc::new(seed),
        }
    }

    /// File-backed storage rooted at `root`, seeded from the bundled question groups.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the root directory cannot be created.
    pub fn files(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let repo = FileRepository::open(root)?;
        let question_groups: Arc<dyn QuestionGroupRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Ok(Self {
            question_groups,
            settings,
            seed: Arc::new(StaticSeed::bundled()),
        })
    }
}
