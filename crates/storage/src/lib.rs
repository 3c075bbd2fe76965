#![forbid(unsafe_code)]

pub mod file;
pub mod records;
pub mod repository;
pub mod seed;

pub use file::FileRepository;
pub use repository::{
    InMemoryRepository, QuestionGroupRepository, SeedSource, SettingsRepository, Storage,
    StorageError,
};
pub use seed::{DEFAULT_COLLECTION_KEY, StaticSeed};
