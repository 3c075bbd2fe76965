use std::sync::Arc;

use quiz_core::{QuestionGroup, QuestionStrategy, StrategyChoice};
use storage::repository::SettingsRepository;

use crate::error::SettingsServiceError;

/// Persisted user preferences that shape new quiz runs.
#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted strategy choice (or the default if never set).
    ///
    /// An unreadable settings file counts as unset; the next
    /// [`SettingsService::set_strategy_choice`] overwrites it.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError::Storage` on I/O failures.
    pub fn strategy_choice(&self) -> Result<StrategyChoice, SettingsServiceError> {
        match self.repo.get_strategy_choice() {
            Ok(choice) => Ok(choice.unwrap_or_default()),
            Err(err) if err.is_corrupt_data() => {
                tracing::warn!(error = %err, "stored strategy choice is unreadable, using default");
                Ok(StrategyChoice::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persist a new strategy choice.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError::Storage` if persistence fails.
    pub fn set_strategy_choice(&self, choice: StrategyChoice) -> Result<(), SettingsServiceError> {
        self.repo.save_strategy_choice(choice)?;
        tracing::info!(strategy = %choice, "question strategy updated");
        Ok(())
    }

    /// Start a strategy over `group` using the persisted choice.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError` if the choice cannot be read or the
    /// strategy cannot be built.
    pub fn make_strategy(
        &self,
        group: &QuestionGroup,
    ) -> Result<QuestionStrategy, SettingsServiceError> {
        let choice = self.strategy_choice()?;
        Ok(choice.make_strategy(group)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quiz_core::{Question, Score};
    use storage::FileRepository;
    use storage::repository::InMemoryRepository;

    fn group() -> QuestionGroup {
        let questions = vec![
            Question::new("1", "", "one").unwrap(),
            Question::new("2", "", "two").unwrap(),
        ];
        QuestionGroup::new("Numbers", questions, Score::default()).unwrap()
    }

    #[test]
    fn defaults_to_sequential_when_unset() {
        let service = SettingsService::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(
            service.strategy_choice().unwrap(),
            StrategyChoice::Sequential
        );
    }

    #[test]
    fn set_choice_is_persisted() {
        let repo = InMemoryRepository::new();
        let service = SettingsService::new(Arc::new(repo.clone()));
        service.set_strategy_choice(StrategyChoice::Random).unwrap();

        let reloaded = SettingsService::new(Arc::new(repo));
        assert_eq!(reloaded.strategy_choice().unwrap(), StrategyChoice::Random);
    }

    #[test]
    fn make_strategy_uses_persisted_choice() {
        let service = SettingsService::new(Arc::new(InMemoryRepository::new()));
        let strategy = service.make_strategy(&group()).unwrap();
        assert_eq!(strategy.choice(), StrategyChoice::Sequential);
        assert_eq!(strategy.questions(), group().questions());

        service.set_strategy_choice(StrategyChoice::Random).unwrap();
        let strategy = service.make_strategy(&group()).unwrap();
        assert_eq!(strategy.choice(), StrategyChoice::Random);
    }

    #[test]
    fn unreadable_settings_fall_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();
        std::fs::write(repo.settings_path(), "question_strategy = \"backwards\"\n").unwrap();
        let service = SettingsService::new(Arc::new(repo.clone()));

        assert_eq!(
            service.strategy_choice().unwrap(),
            StrategyChoice::Sequential
        );

        service.set_strategy_choice(StrategyChoice::Random).unwrap();
        assert_eq!(
            repo.get_strategy_choice().unwrap(),
            Some(StrategyChoice::Random)
        );
    }
}
