//! Shared error types for the services crate.

use thiserror::Error;

use assessment_core::model::AnswerError;
use assessment_core::scoring::ScoringError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Why a saved progress snapshot could not be restored.
///
/// Never escapes `ProgressService::load`; corrupt state is reported as absence.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("corrupt persisted state: {reason}")]
    CorruptPersistedState { reason: String },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by quiz session actions.
///
/// All are recoverable: the session is left exactly as it was.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error("session already submitted")]
    Finished,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
