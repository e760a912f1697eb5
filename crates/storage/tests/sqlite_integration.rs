use assessment_core::Catalog;
use assessment_core::model::{AnswerState, QuestionId};
use assessment_core::time::fixed_now;
use storage::repository::{KeyValueStore, ProgressRecord, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_slots_overwrite_and_remove() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_slots?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get("quizProgress").await.unwrap().is_none());
    assert!(!repo.contains("quizProgress").await.unwrap());

    repo.put("quizProgress", "first").await.unwrap();
    repo.put("quizProgress", "second").await.unwrap();
    assert_eq!(
        repo.get("quizProgress").await.unwrap().as_deref(),
        Some("second")
    );
    assert!(repo.contains("quizProgress").await.unwrap());

    repo.remove("quizProgress").await.unwrap();
    assert!(repo.get("quizProgress").await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM schema_migrations")
        .fetch_one(repo.pool())
        .await
        .unwrap();
    assert_eq!(row.0, 1);
}

#[tokio::test]
async fn sqlite_storage_round_trips_progress_snapshot() {
    let storage = Storage::sqlite("sqlite:file:memdb_progress?mode=memory&cache=shared")
        .await
        .expect("storage");

    let catalog = Catalog::standard();
    let mut state = AnswerState::new(catalog, fixed_now());
    for id in 1..=7 {
        state.record_answer(catalog, QuestionId::new(id), 2).unwrap();
    }
    state.jump_to(6).unwrap();

    let json = ProgressRecord::from_state(&state, fixed_now())
        .to_json()
        .unwrap();
    storage.slots.put("quizProgress", &json).await.unwrap();

    let raw = storage.slots.get("quizProgress").await.unwrap().unwrap();
    let restored = ProgressRecord::from_json(&raw)
        .unwrap()
        .into_state(catalog, fixed_now())
        .unwrap();
    assert_eq!(restored, state);
}
