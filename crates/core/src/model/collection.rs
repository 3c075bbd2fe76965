use std::collections::HashSet;

use crate::model::{QuestionGroup, Score, ValidationError};

/// Ordered set of question groups keyed by title.
///
/// Titles are unique within a collection; that is checked on construction and
/// on every insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionGroupCollection {
    groups: Vec<QuestionGroup>,
}

impl QuestionGroupCollection {
    /// Creates a collection, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateTitle` for the first title seen twice.
    pub fn new(groups: Vec<QuestionGroup>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(groups.len());
        for group in &groups {
            if !seen.insert(group.title()) {
                return Err(ValidationError::DuplicateTitle {
                    title: group.title().to_owned(),
                });
            }
        }
        Ok(Self { groups })
    }

    #[must_use]
    pub fn groups(&self) -> &[QuestionGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionGroup> {
        self.groups.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<&QuestionGroup> {
        self.groups.iter().find(|group| group.title() == title)
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// Appends a group at the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateTitle` if a group with the same title
    /// already exists; the collection is left unchanged.
    pub fn insert(&mut self, group: QuestionGroup) -> Result<(), ValidationError> {
        if self.contains(group.title()) {
            return Err(ValidationError::DuplicateTitle {
                title: group.title().to_owned(),
            });
        }
        self.groups.push(group);
        Ok(())
    }

    /// Replaces the stored score of the group titled `title`.
    ///
    /// Returns `false` when no such group exists.
    pub fn update_score(&mut self, title: &str, score: Score) -> bool {
        match self.groups.iter_mut().find(|group| group.title() == title) {
            Some(group) => {
                group.set_score(score);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a QuestionGroupCollection {
    type Item = &'a QuestionGroup;
    type IntoIter = std::slice::Iter<'a, QuestionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn group(title: &str) -> QuestionGroup {
        let question = Question::new("A", "", "Q").unwrap();
        QuestionGroup::new(title, vec![question], Score::default()).unwrap()
    }

    #[test]
    fn new_rejects_duplicate_titles() {
        let err = QuestionGroupCollection::new(vec![group("Hiragana"), group("Hiragana")])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateTitle {
                title: "Hiragana".into()
            }
        );
    }

    #[test]
    fn insert_keeps_order_and_rejects_duplicates() {
        let mut collection = QuestionGroupCollection::new(vec![group("B")]).unwrap();
        collection.insert(group("A")).unwrap();
        assert!(collection.insert(group("B")).is_err());

        let titles: Vec<_> = collection.iter().map(QuestionGroup::title).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn update_score_targets_group_by_title() {
        let mut collection = QuestionGroupCollection::new(vec![group("A"), group("B")]).unwrap();
        assert!(collection.update_score("B", Score::new(2, 1)));
        assert!(!collection.update_score("C", Score::new(1, 0)));

        assert_eq!(collection.get("A").unwrap().score(), Score::default());
        assert_eq!(collection.get("B").unwrap().score(), Score::new(2, 1));
    }
}
