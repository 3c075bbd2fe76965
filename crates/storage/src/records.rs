//! Persisted shapes for question groups.
//!
//! These mirror the domain types so the on-disk format can evolve without
//! leaking serde concerns into `quiz_core`. Decoding always goes back through
//! the validating domain constructors.

use quiz_core::{Question, QuestionGroup, QuestionGroupCollection, Score, ValidationError};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub answer: String,
    #[serde(default)]
    pub hint: Option<String>,
    pub prompt: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub correct_count: u32,
    pub incorrect_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionGroupRecord {
    pub title: String,
    pub questions: Vec<QuestionRecord>,
    #[serde(default)]
    pub score: ScoreRecord,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            answer: question.answer().to_owned(),
            hint: Some(question.hint().to_owned()),
            prompt: question.prompt().to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns `ValidationError` if the answer or prompt is empty.
    pub fn into_question(self) -> Result<Question, ValidationError> {
        Question::new(self.answer, self.hint.unwrap_or_default(), self.prompt)
    }
}

impl From<Score> for ScoreRecord {
    fn from(score: Score) -> Self {
        Self {
            correct_count: score.correct_count(),
            incorrect_count: score.incorrect_count(),
        }
    }
}

impl From<ScoreRecord> for Score {
    fn from(record: ScoreRecord) -> Self {
        Score::new(record.correct_count, record.incorrect_count)
    }
}

impl QuestionGroupRecord {
    #[must_use]
    pub fn from_group(group: &QuestionGroup) -> Self {
        Self {
            title: group.title().to_owned(),
            questions: group
                .questions()
                .iter()
                .map(QuestionRecord::from_question)
                .collect(),
            score: group.score().into(),
        }
    }

    /// # Errors
    ///
    /// Returns the first `ValidationError` raised by the group or its questions.
    pub fn into_group(self) -> Result<QuestionGroup, ValidationError> {
        let questions = self
            .questions
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        QuestionGroup::new(self.title, questions, self.score.into())
    }
}

/// Encode a collection as pretty-printed JSON.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_collection(collection: &QuestionGroupCollection) -> Result<Vec<u8>, StorageError> {
    let records: Vec<QuestionGroupRecord> = collection
        .iter()
        .map(QuestionGroupRecord::from_group)
        .collect();
    serde_json::to_vec_pretty(&records).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode and validate a JSON collection.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidRecord` when a record fails domain validation.
pub fn decode_collection(bytes: &[u8]) -> Result<QuestionGroupCollection, StorageError> {
    let records: Vec<QuestionGroupRecord> =
        serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let mut groups = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let title = record.title.clone();
        let group = record.into_group().map_err(|e| {
            StorageError::InvalidRecord(format!("group #{position} ({title:?}): {e}"))
        })?;
        groups.push(group);
    }

    QuestionGroupCollection::new(groups).map_err(|e| StorageError::InvalidRecord(e.to_string()))
}
