use async_trait::async_trait;
use chrono::{DateTime, Utc};
use assessment_core::Catalog;
use assessment_core::model::{AnswerError, AnswerState, QuestionId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage quota exceeded ({needed} bytes needed, {limit} allowed)")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

/// Persisted shape of an in-progress session.
///
/// Mirrors `AnswerState` so the domain type stays free of storage concerns.
/// `start_time` stays textual: an unreadable value is not fatal, it is replaced
/// by the resume moment on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_answers: BTreeMap<QuestionId, u8>,
    pub current_question_index: usize,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_state(state: &AnswerState, saved_at: DateTime<Utc>) -> Self {
        Self {
            user_answers: state.answers().clone(),
            current_question_index: state.current_index(),
            start_time: Some(state.session_start().to_rfc3339()),
            saved_at: Some(saved_at),
        }
    }

    /// Parsed session start, if present and well-formed.
    #[must_use]
    pub fn session_start(&self) -> Option<DateTime<Utc>> {
        self.start_time
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|t| t.with_timezone(&Utc))
    }

    /// Convert the record back into a domain `AnswerState`.
    ///
    /// A missing or unreadable start time becomes `resumed_at`.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if any answer or the index does not fit `catalog`.
    pub fn into_state(
        self,
        catalog: &Catalog,
        resumed_at: DateTime<Utc>,
    ) -> Result<AnswerState, AnswerError> {
        let session_start = self.session_start().unwrap_or(resumed_at);
        AnswerState::from_persisted(
            catalog,
            self.user_answers,
            self.current_question_index,
            session_start,
        )
    }

    /// Serialize to the JSON text stored in a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Parse slot JSON.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

//
// ─── KEY-VALUE SLOTS ───────────────────────────────────────────────────────────
//

/// Durable string slots addressed by a fixed key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Removing a missing slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Whether a slot currently holds a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Simple in-memory slot store for testing and prototyping.
///
/// An optional byte quota makes writes fail the way a full browser store does.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys plus values exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            quota_bytes: Some(bytes),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if let Some(limit) = self.quota_bytes {
            let others: usize = guard
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Slot storage behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub slots: Arc<dyn KeyValueStore>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let slots: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        Self { slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_core::time::fixed_now;
    use chrono::Duration;

    fn sample_state() -> AnswerState {
        let catalog = Catalog::standard();
        let mut state = AnswerState::new(catalog, fixed_now());
        state.record_answer(catalog, QuestionId::new(1), 3).unwrap();
        state.record_answer(catalog, QuestionId::new(2), 4).unwrap();
        state.jump_to(2).unwrap();
        state
    }

    #[tokio::test]
    async fn slots_put_get_remove() {
        let store = InMemoryStore::new();
        assert!(!store.contains("quizProgress").await.unwrap());

        store.put("quizProgress", "{}").await.unwrap();
        assert_eq!(store.get("quizProgress").await.unwrap().as_deref(), Some("{}"));
        assert!(store.contains("quizProgress").await.unwrap());

        store.put("quizProgress", "[]").await.unwrap();
        assert_eq!(store.get("quizProgress").await.unwrap().as_deref(), Some("[]"));

        store.remove("quizProgress").await.unwrap();
        store.remove("quizProgress").await.unwrap();
        assert!(store.get("quizProgress").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn quota_rejects_oversized_writes() {
        let store = InMemoryStore::with_quota(16);
        store.put("k", "small").await.unwrap();
        let err = store.put("k", "much too large for the quota").await.unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { limit: 16, .. }));
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn progress_record_round_trips_state() {
        let state = sample_state();
        let record = ProgressRecord::from_state(&state, fixed_now() + Duration::seconds(5));
        let json = record.to_json().unwrap();

        let restored = ProgressRecord::from_json(&json)
            .unwrap()
            .into_state(Catalog::standard(), fixed_now() + Duration::hours(1))
            .unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn progress_json_uses_snapshot_field_names() {
        let record = ProgressRecord::from_state(&sample_state(), fixed_now());
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["currentQuestionIndex"], 2);
        assert_eq!(value["userAnswers"]["1"], 3);
        assert!(value["startTime"].is_string());
        assert!(value["savedAt"].is_string());
    }

    #[test]
    fn unreadable_start_time_falls_back_to_resume_moment() {
        let raw = r#"{"userAnswers":{"5":2},"currentQuestionIndex":4,"startTime":"yesterday"}"#;
        let resumed_at = fixed_now() + Duration::minutes(3);
        let state = ProgressRecord::from_json(raw)
            .unwrap()
            .into_state(Catalog::standard(), resumed_at)
            .unwrap();
        assert_eq!(state.session_start(), resumed_at);
        assert_eq!(state.answer_for(QuestionId::new(5)), Some(2));
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = ProgressRecord::from_json("{not json").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
