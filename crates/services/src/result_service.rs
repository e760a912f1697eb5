use std::sync::Arc;

use assessment_core::model::QuizResult;
use storage::repository::{KeyValueStore, StorageError};
use tracing::{debug, warn};

/// Slot holding the most recent completed result for the results view.
#[derive(Clone)]
pub struct ResultService {
    slots: Arc<dyn KeyValueStore>,
    key: String,
}

impl ResultService {
    #[must_use]
    pub fn new(slots: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    /// Persist `result` as the last result, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or the write fails.
    pub async fn store(&self, result: &QuizResult) -> Result<(), StorageError> {
        let json = serde_json::to_string(result)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.slots.put(&self.key, &json).await?;
        debug!(key = %self.key, final_score = result.final_score(), "result stored");
        Ok(())
    }

    /// Read the last stored result. Unreadable data counts as none.
    pub async fn load_last(&self) -> Option<QuizResult> {
        let raw = match self.slots.get(&self.key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key = %self.key, error = %err, "result slot unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(result) => Some(result),
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring corrupt stored result");
                None
            }
        }
    }

    /// Remove the stored result.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the slot cannot be deleted.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.slots.remove(&self.key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_core::Catalog;
    use assessment_core::model::AnswerState;
    use assessment_core::scoring::compute_result;
    use assessment_core::time::fixed_now;
    use storage::repository::InMemoryStore;

    fn finished_result() -> QuizResult {
        let catalog = Catalog::standard();
        let mut state = AnswerState::new(catalog, fixed_now());
        for id in catalog.ids() {
            state.record_answer(catalog, id, 2).unwrap();
        }
        compute_result(catalog, &state, fixed_now()).unwrap()
    }

    #[tokio::test]
    async fn stores_and_reads_back_last_result() {
        let store = InMemoryStore::new();
        let results = ResultService::new(Arc::new(store.clone()), "assessmentResults");
        assert!(results.load_last().await.is_none());

        let result = finished_result();
        results.store(&result).await.unwrap();
        assert_eq!(results.load_last().await, Some(result));

        let raw = store.get("assessmentResults").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["classification"], "Balanced Personality");
        assert_eq!(value["categoryScores"]["Stress Management"], 26);
        assert_eq!(value["finalScore"], 127.0);
    }

    #[tokio::test]
    async fn corrupt_result_reads_as_none() {
        let store = InMemoryStore::new();
        store.put("assessmentResults", "[1,2,3]").await.unwrap();
        let results = ResultService::new(Arc::new(store), "assessmentResults");
        assert!(results.load_last().await.is_none());
    }
}
