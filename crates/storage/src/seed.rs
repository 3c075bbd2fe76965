//! First-run question groups.

use quiz_core::QuestionGroupCollection;

use crate::records::decode_collection;
use crate::repository::{SeedSource, StorageError};

/// Key under which the default user collection is stored.
pub const DEFAULT_COLLECTION_KEY: &str = "QuestionGroupData";

const BUNDLED_SEED: &str = include_str!("../assets/QuestionGroupData.json");

/// Seed collection held as JSON text in the same format as saved collections.
#[derive(Debug, Clone)]
pub struct StaticSeed {
    raw: String,
}

impl StaticSeed {
    /// The question groups shipped with the application.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(BUNDLED_SEED)
    }

    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl SeedSource for StaticSeed {
    fn load_seed(&self) -> Result<QuestionGroupCollection, StorageError> {
        decode_collection(self.raw.as_bytes()).map_err(|e| StorageError::CorruptSeed(e.to_string()))
    }
}
