use std::sync::Arc;

use assessment_core::Catalog;
use assessment_core::model::QuizSettings;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::quiz::QuizService;
use crate::report::ResultReport;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the bundled catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        settings: QuizSettings,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, settings))
    }

    /// Build services over volatile in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock, settings: QuizSettings) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, settings)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, settings: QuizSettings) -> Self {
        let catalog = Arc::new(Catalog::standard().clone());
        let quiz = Arc::new(QuizService::new(
            clock,
            settings,
            catalog,
            Arc::clone(&storage.slots),
        ));
        Self { quiz }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    /// Report for the last stored result, if any.
    pub async fn last_report(&self) -> Option<ResultReport> {
        let result = self.quiz.results().load_last().await?;
        Some(ResultReport::new(self.quiz.catalog(), &result))
    }
}
