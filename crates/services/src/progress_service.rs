use std::sync::Arc;

use assessment_core::Catalog;
use assessment_core::model::AnswerState;
use storage::repository::{KeyValueStore, ProgressRecord, StorageError};
use tracing::{debug, warn};

use crate::Clock;
use crate::error::ProgressError;

/// Single-slot snapshot of the session in progress.
///
/// Every save overwrites the previous snapshot; there is no history and no
/// multi-profile support.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    slots: Arc<dyn KeyValueStore>,
    key: String,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, slots: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            clock,
            slots,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshot `state` together with the save time.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be written.
    pub async fn save(&self, state: &AnswerState) -> Result<(), StorageError> {
        let json = ProgressRecord::from_state(state, self.clock.now()).to_json()?;
        self.slots.put(&self.key, &json).await?;
        debug!(
            key = %self.key,
            answered = state.answered_count(),
            index = state.current_index(),
            "progress saved"
        );
        Ok(())
    }

    /// Restore the saved state, distinguishing absence from corruption.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::CorruptPersistedState` for unreadable or
    /// inconsistent snapshots and `ProgressError::Storage` for read failures.
    pub async fn try_load(&self, catalog: &Catalog) -> Result<Option<AnswerState>, ProgressError> {
        let Some(raw) = self.slots.get(&self.key).await? else {
            return Ok(None);
        };
        let record = ProgressRecord::from_json(&raw).map_err(|err| {
            ProgressError::CorruptPersistedState {
                reason: err.to_string(),
            }
        })?;
        let state = record
            .into_state(catalog, self.clock.now())
            .map_err(|err| ProgressError::CorruptPersistedState {
                reason: err.to_string(),
            })?;
        Ok(Some(state))
    }

    /// Restore the saved state; corrupt or unreadable data counts as "nothing saved".
    ///
    /// A corrupt snapshot is also removed, so `exists` stops reporting it.
    pub async fn load(&self, catalog: &Catalog) -> Option<AnswerState> {
        match self.try_load(catalog).await {
            Ok(state) => state,
            Err(err @ ProgressError::CorruptPersistedState { .. }) => {
                warn!(key = %self.key, error = %err, "discarding corrupt saved progress");
                if let Err(err) = self.clear().await {
                    warn!(key = %self.key, error = %err, "could not discard corrupt progress");
                }
                None
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring saved progress");
                None
            }
        }
    }

    /// Remove the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be deleted.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.slots.remove(&self.key).await?;
        debug!(key = %self.key, "progress cleared");
        Ok(())
    }

    /// Cheap check used to decide whether to offer "resume".
    ///
    /// Does not validate the snapshot; `load` drops a corrupt one.
    pub async fn exists(&self) -> bool {
        match self.slots.contains(&self.key).await {
            Ok(found) => found,
            Err(err) => {
                warn!(key = %self.key, error = %err, "progress slot unreadable");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_core::model::QuestionId;
    use assessment_core::time::{fixed_clock, fixed_now};
    use storage::repository::InMemoryStore;

    fn service(store: &InMemoryStore) -> ProgressService {
        ProgressService::new(fixed_clock(), Arc::new(store.clone()), "quizProgress")
    }

    #[tokio::test]
    async fn save_then_load_restores_state() {
        let store = InMemoryStore::new();
        let progress = service(&store);
        let catalog = Catalog::standard();

        let mut state = AnswerState::new(catalog, fixed_now());
        state.record_answer(catalog, QuestionId::new(1), 4).unwrap();
        state.advance();

        assert!(!progress.exists().await);
        progress.save(&state).await.unwrap();
        assert!(progress.exists().await);
        assert_eq!(progress.load(catalog).await, Some(state));
    }

    #[tokio::test]
    async fn malformed_snapshot_loads_as_none() {
        let store = InMemoryStore::new();
        store.put("quizProgress", "{\"userAnswers\": 12").await.unwrap();
        let progress = service(&store);

        assert!(progress.exists().await);
        assert!(matches!(
            progress.try_load(Catalog::standard()).await,
            Err(ProgressError::CorruptPersistedState { .. })
        ));
        assert!(progress.load(Catalog::standard()).await.is_none());
        assert!(!progress.exists().await);
    }

    #[tokio::test]
    async fn snapshot_with_foreign_weight_loads_as_none() {
        let store = InMemoryStore::new();
        store
            .put(
                "quizProgress",
                r#"{"userAnswers":{"3":9},"currentQuestionIndex":0,"startTime":null}"#,
            )
            .await
            .unwrap();
        let progress = service(&store);
        assert!(progress.load(Catalog::standard()).await.is_none());
        assert!(!progress.exists().await);
    }

    #[tokio::test]
    async fn clear_removes_snapshot() {
        let store = InMemoryStore::new();
        let progress = service(&store);
        let state = AnswerState::new(Catalog::standard(), fixed_now());
        progress.save(&state).await.unwrap();

        progress.clear().await.unwrap();
        assert!(!progress.exists().await);
        assert!(progress.load(Catalog::standard()).await.is_none());
    }
}
