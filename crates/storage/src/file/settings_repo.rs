use quiz_core::StrategyChoice;
use serde::{Deserialize, Serialize};

use super::{FileRepository, read_optional, write_atomic};
use crate::repository::{SettingsRepository, StorageError};

/// On-disk shape of `settings.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    question_strategy: Option<String>,
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

impl SettingsRepository for FileRepository {
    fn get_strategy_choice(&self) -> Result<Option<StrategyChoice>, StorageError> {
        let path = self.settings_path();
        let Some(bytes) = read_optional(&path)? else {
            return Ok(None);
        };

        let raw = String::from_utf8(bytes).map_err(ser)?;
        let record: SettingsRecord = toml::from_str(&raw).map_err(ser)?;
        record
            .question_strategy
            .map(|value| {
                value
                    .parse::<StrategyChoice>()
                    .map_err(|e| StorageError::InvalidRecord(e.to_string()))
            })
            .transpose()
    }

    fn save_strategy_choice(&self, choice: StrategyChoice) -> Result<(), StorageError> {
        let record = SettingsRecord {
            question_strategy: Some(choice.as_str().to_owned()),
        };
        let raw = toml::to_string(&record).map_err(ser)?;
        let path = self.settings_path();
        write_atomic(&path, raw.as_bytes())?;
        tracing::debug!(path = %path.display(), strategy = %choice, "saved settings");
        Ok(())
    }
}
