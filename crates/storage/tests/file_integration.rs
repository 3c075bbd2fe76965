use quiz_core::{
    QuestionBuilder, QuestionGroup, QuestionGroupBuilder, QuestionGroupCollection, Score,
};
use storage::repository::{QuestionGroupRepository, StorageError};
use storage::{DEFAULT_COLLECTION_KEY, FileRepository};

fn build_group(title: &str, pairs: &[(&str, &str, &str)], score: Score) -> QuestionGroup {
    let mut builder = QuestionGroupBuilder::new().with_title(title);
    for (prompt, answer, hint) in pairs {
        builder = builder.with_question(
            QuestionBuilder::new()
                .with_prompt(*prompt)
                .with_answer(*answer)
                .with_hint(*hint),
        );
    }
    let mut group = builder.build().unwrap();
    group.set_score(score);
    group
}

fn sample_collection() -> QuestionGroupCollection {
    QuestionGroupCollection::new(vec![
        build_group(
            "Colors",
            &[("rojo", "red", ""), ("azul", "blue", "sky")],
            Score::new(5, 2),
        ),
        build_group("Numbers", &[("uno", "one", "")], Score::new(0, 7)),
    ])
    .unwrap()
}

#[test]
fn save_then_load_round_trips_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path()).unwrap();
    let collection = sample_collection();

    repo.save_collection(DEFAULT_COLLECTION_KEY, &collection)
        .unwrap();

    let reopened = FileRepository::open(dir.path()).unwrap();
    let loaded = reopened
        .load_collection(DEFAULT_COLLECTION_KEY)
        .unwrap()
        .expect("collection saved");
    assert_eq!(loaded, collection);
    assert_eq!(loaded.get("Colors").unwrap().score(), Score::new(5, 2));
    assert_eq!(loaded.get("Numbers").unwrap().score(), Score::new(0, 7));
}

#[test]
fn absent_collection_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path()).unwrap();
    assert!(repo.load_collection("missing").unwrap().is_none());
}

#[test]
fn truncated_file_is_reported_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path()).unwrap();
    let path = repo.collection_path(DEFAULT_COLLECTION_KEY).unwrap();
    std::fs::write(&path, b"[{\"title\": \"Col").unwrap();

    let err = repo.load_collection(DEFAULT_COLLECTION_KEY).unwrap_err();
    assert!(err.is_corrupt_data());
}

#[test]
fn save_replaces_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path()).unwrap();
    let path = repo.collection_path(DEFAULT_COLLECTION_KEY).unwrap();
    std::fs::write(&path, b"garbage").unwrap();

    repo.save_collection(DEFAULT_COLLECTION_KEY, &sample_collection())
        .unwrap();
    assert_eq!(
        repo.load_collection(DEFAULT_COLLECTION_KEY).unwrap(),
        Some(sample_collection())
    );
}

#[test]
fn collections_are_isolated_by_key() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path()).unwrap();
    repo.save_collection("first", &sample_collection()).unwrap();

    assert!(repo.load_collection("second").unwrap().is_none());
    assert!(matches!(
        repo.save_collection("../outside", &sample_collection()),
        Err(StorageError::InvalidKey(_))
    ));
}

#[test]
fn whitespace_text_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileRepository::open(dir.path()).unwrap();
    let collection = QuestionGroupCollection::new(vec![build_group(
        "Spaces",
        &[(" ", "  ", ""), ("gap", " ", " ")],
        Score::new(9, 1),
    )])
    .unwrap();

    repo.save_collection(DEFAULT_COLLECTION_KEY, &collection)
        .unwrap();
    let loaded = repo
        .load_collection(DEFAULT_COLLECTION_KEY)
        .unwrap()
        .expect("collection saved");
    assert_eq!(loaded, collection);
    assert_eq!(loaded.get("Spaces").unwrap().questions()[1].answer(), " ");
}
