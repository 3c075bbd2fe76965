use std::sync::Arc;

use quiz_core::{QuestionGroupBuilder, QuestionGroupCollection, Score};
use storage::repository::{QuestionGroupRepository, SeedSource};

use crate::error::QuestionGroupServiceError;

/// Where a loaded collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionOrigin {
    /// A previously saved user collection.
    Saved,
    /// The bundled seed, because no usable user collection existed.
    Seeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCollection {
    pub collection: QuestionGroupCollection,
    pub origin: CollectionOrigin,
}

impl LoadedCollection {
    #[must_use]
    pub fn was_seeded(&self) -> bool {
        self.origin == CollectionOrigin::Seeded
    }
}

/// Row for a group picker.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub title: String,
    pub question_count: usize,
    pub score: Score,
    pub running_percentage: f64,
}

/// Loads and saves the user's question group collection.
#[derive(Clone)]
pub struct QuestionGroupService {
    key: String,
    groups: Arc<dyn QuestionGroupRepository>,
    seed: Arc<dyn SeedSource>,
}

impl QuestionGroupService {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        groups: Arc<dyn QuestionGroupRepository>,
        seed: Arc<dyn SeedSource>,
    ) -> Self {
        Self {
            key: key.into(),
            groups,
            seed,
        }
    }

    /// Read the user collection, falling back to the seed when it is absent
    /// or corrupt. Never writes.
    ///
    /// # Errors
    ///
    /// Returns `QuestionGroupServiceError::FatalConfiguration` if the seed is
    /// needed but unusable, or `QuestionGroupServiceError::Storage` for I/O
    /// failures other than a missing file.
    pub fn load_or_seed(&self) -> Result<LoadedCollection, QuestionGroupServiceError> {
        match self.groups.load_collection(&self.key) {
            Ok(Some(collection)) => {
                return Ok(LoadedCollection {
                    collection,
                    origin: CollectionOrigin::Saved,
                });
            }
            Ok(None) => {
                tracing::info!(key = %self.key, "no saved question groups, using bundled seed");
            }
            Err(err) if err.is_corrupt_data() => {
                tracing::warn!(key = %self.key, error = %err, "saved question groups are corrupt, using bundled seed");
            }
            Err(err) => return Err(err.into()),
        }

        let collection = self
            .seed
            .load_seed()
            .map_err(QuestionGroupServiceError::FatalConfiguration)?;
        Ok(LoadedCollection {
            collection,
            origin: CollectionOrigin::Seeded,
        })
    }

    /// Load the collection, persisting the seed as the user collection when
    /// it had to be used, so later loads skip the fallback.
    ///
    /// # Errors
    ///
    /// See [`QuestionGroupService::load_or_seed`]; also returns
    /// `QuestionGroupServiceError::Storage` if persisting the seed fails.
    pub fn load_collection(&self) -> Result<LoadedCollection, QuestionGroupServiceError> {
        let loaded = self.load_or_seed()?;
        if loaded.was_seeded() {
            self.save_collection(&loaded.collection)?;
        }
        Ok(loaded)
    }

    /// Persist the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `QuestionGroupServiceError::Storage` if the write fails; the
    /// previously stored collection is left intact.
    pub fn save_collection(
        &self,
        collection: &QuestionGroupCollection,
    ) -> Result<(), QuestionGroupServiceError> {
        self.groups.save_collection(&self.key, collection)?;
        tracing::debug!(key = %self.key, groups = collection.len(), "question groups saved");
        Ok(())
    }

    /// Build a new group, append it to `collection`, and save.
    ///
    /// `collection` is only modified once the save has succeeded.
    ///
    /// # Errors
    ///
    /// Returns `QuestionGroupServiceError::Validation` if the builder is
    /// invalid or the title is taken, or `QuestionGroupServiceError::Storage`
    /// if the save fails.
    pub fn create_group(
        &self,
        collection: &mut QuestionGroupCollection,
        builder: &QuestionGroupBuilder,
    ) -> Result<(), QuestionGroupServiceError> {
        let group = builder.build()?;
        let title = group.title().to_owned();

        let mut updated = collection.clone();
        updated.insert(group)?;
        self.save_collection(&updated)?;
        *collection = updated;

        tracing::info!(%title, "question group created");
        Ok(())
    }

    #[must_use]
    pub fn summaries(collection: &QuestionGroupCollection) -> Vec<GroupSummary> {
        collection
            .iter()
            .map(|group| GroupSummary {
                title: group.title().to_owned(),
                question_count: group.questions().len(),
                score: group.score(),
                running_percentage: group.score().running_percentage(),
            })
            .collect()
    }
}
