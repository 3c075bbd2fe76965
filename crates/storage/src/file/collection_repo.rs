use quiz_core::QuestionGroupCollection;

use super::{FileRepository, read_optional, write_atomic};
use crate::records::{decode_collection, encode_collection};
use crate::repository::{QuestionGroupRepository, StorageError};

impl QuestionGroupRepository for FileRepository {
    fn load_collection(
        &self,
        key: &str,
    ) -> Result<Option<QuestionGroupCollection>, StorageError> {
        let path = self.collection_path(key)?;
        let Some(bytes) = read_optional(&path)? else {
            tracing::debug!(path = %path.display(), "no saved collection");
            return Ok(None);
        };

        let collection = decode_collection(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            groups = collection.len(),
            "loaded collection"
        );
        Ok(Some(collection))
    }

    fn save_collection(
        &self,
        key: &str,
        collection: &QuestionGroupCollection,
    ) -> Result<(), StorageError> {
        let path = self.collection_path(key)?;
        let bytes = encode_collection(collection)?;
        write_atomic(&path, &bytes)?;
        tracing::debug!(
            path = %path.display(),
            groups = collection.len(),
            bytes = bytes.len(),
            "saved collection"
        );
        Ok(())
    }
}
