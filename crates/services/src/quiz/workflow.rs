use std::sync::Arc;
use std::time::Duration;

use assessment_core::Catalog;
use assessment_core::model::{AnswerState, QuestionId, QuizResult, QuizSettings};
use assessment_core::scoring::compute_result;
use storage::repository::KeyValueStore;
use tracing::{debug, info, warn};

use super::auto_advance::{AutoAdvanceOutcome, AutoAdvanceTicket};
use super::keyboard::KeyCommand;
use super::session::{Direction, QuizSession, SessionMode};
use super::view::ReviewView;
use crate::Clock;
use crate::error::QuizError;
use crate::progress_service::ProgressService;
use crate::result_service::ResultService;

/// Whether the progress snapshot was written after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSave {
    Saved,
    /// Nothing changed, so nothing was written.
    Skipped,
    /// The write failed; the in-memory session carries on regardless.
    NotSaved,
}

/// Result of a state-changing action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub changed: bool,
    pub progress: ProgressSave,
    pub auto_advance: Option<AutoAdvanceTicket>,
}

/// A completed submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub result: QuizResult,
    pub result_saved: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Ignored,
    Action(ActionOutcome),
    Submitted(Submission),
}

/// Orchestrates quiz sessions and keeps the progress slot in step with them.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    settings: QuizSettings,
    catalog: Arc<Catalog>,
    progress: ProgressService,
    results: ResultService,
}

impl QuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        settings: QuizSettings,
        catalog: Arc<Catalog>,
        slots: Arc<dyn KeyValueStore>,
    ) -> Self {
        let progress = ProgressService::new(clock, Arc::clone(&slots), settings.progress_key());
        let results = ResultService::new(slots, settings.result_key());
        Self {
            clock,
            settings,
            catalog,
            progress,
            results,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    #[must_use]
    pub fn results(&self) -> &ResultService {
        &self.results
    }

    /// Whether a saved session exists to offer "resume".
    pub async fn has_resumable_session(&self) -> bool {
        self.progress.exists().await
    }

    /// Discard any saved progress and begin at the first question.
    pub async fn start_fresh(&self) -> QuizSession {
        if let Err(err) = self.progress.clear().await {
            warn!(error = %err, "could not clear saved progress");
        }
        let state = AnswerState::new(&self.catalog, self.clock.now());
        debug!(questions = self.catalog.len(), "fresh session started");
        QuizSession::new(Arc::clone(&self.catalog), state, false)
    }

    /// Continue the saved session, if one can be restored.
    ///
    /// Corrupt snapshots are logged and reported as `None`.
    pub async fn resume(&self) -> Option<QuizSession> {
        let state = self.progress.load(&self.catalog).await?;
        debug!(
            answered = state.answered_count(),
            index = state.current_index(),
            "session resumed"
        );
        Some(QuizSession::new(Arc::clone(&self.catalog), state, true))
    }

    /// Resume when possible, otherwise start fresh.
    pub async fn resume_or_start(&self) -> QuizSession {
        match self.resume().await {
            Some(session) => session,
            None => self.start_fresh().await,
        }
    }

    /// Record the chosen option for a question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Answer` for an unknown question or a weight outside
    /// the question's options, and `QuizError::Finished` after submission.
    pub async fn select_option(
        &self,
        session: &mut QuizSession,
        question_id: QuestionId,
        weight: u8,
    ) -> Result<ActionOutcome, QuizError> {
        let changed = session.record(question_id, weight)?;
        let progress = if changed {
            self.snapshot(session.state()).await
        } else {
            ProgressSave::Skipped
        };

        let on_current = session
            .current_question()
            .is_some_and(|q| q.id() == question_id);
        let auto_advance = if self.settings.auto_advance()
            && on_current
            && session.mode() == SessionMode::Answering
        {
            session.schedule_auto_advance(Duration::from_millis(u64::from(
                self.settings.auto_advance_delay_ms(),
            )))
        } else {
            None
        };

        Ok(ActionOutcome {
            changed,
            progress,
            auto_advance,
        })
    }

    /// Move one question back or forward; a no-op at either end.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` after submission.
    pub async fn navigate(
        &self,
        session: &mut QuizSession,
        direction: Direction,
    ) -> Result<ActionOutcome, QuizError> {
        let moved = session.navigate(direction)?;
        self.after_move(session, moved).await
    }

    /// Jump straight to a question, typically from the review list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Answer` wrapping `AnswerError::OutOfRange` for a bad
    /// index, and `QuizError::Finished` after submission.
    pub async fn jump_to(
        &self,
        session: &mut QuizSession,
        index: usize,
    ) -> Result<ActionOutcome, QuizError> {
        let before = session.current_index();
        session.jump(index)?;
        self.after_move(session, before != index).await
    }

    /// Switch to the review list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` after submission.
    pub fn open_review(&self, session: &mut QuizSession) -> Result<ReviewView, QuizError> {
        session.open_review()?;
        Ok(session.review())
    }

    /// Leave the review list and return to the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` after submission.
    pub fn close_review(&self, session: &mut QuizSession) -> Result<(), QuizError> {
        session.close_review()
    }

    /// Drop any pending auto-advance.
    pub fn cancel_auto_advance(&self, session: &mut QuizSession) {
        session.cancel_auto_advance();
    }

    /// Fire a previously issued auto-advance ticket.
    pub async fn fire_auto_advance(
        &self,
        session: &mut QuizSession,
        ticket: AutoAdvanceTicket,
    ) -> AutoAdvanceOutcome {
        let outcome = session.fire(ticket);
        if let AutoAdvanceOutcome::Advanced { .. } = outcome {
            self.snapshot(session.state()).await;
        }
        outcome
    }

    /// Score the session, store the result, and drop the saved progress.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Scoring` (`IncompleteSubmission`) while questions are
    /// unanswered, and `QuizError::Finished` for a repeat submission. The session
    /// is unchanged on error.
    pub async fn submit(&self, session: &mut QuizSession) -> Result<Submission, QuizError> {
        if session.is_finished() {
            return Err(QuizError::Finished);
        }
        let result = compute_result(&self.catalog, session.state(), self.clock.now())?;
        session.finish();

        let result_saved = match self.results.store(&result).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "result not saved");
                false
            }
        };
        if let Err(err) = self.progress.clear().await {
            warn!(error = %err, "could not clear progress after submission");
        }

        info!(
            final_score = result.final_score(),
            classification = %result.classification(),
            time_taken_seconds = result.time_taken_seconds(),
            "assessment submitted"
        );
        Ok(Submission {
            result,
            result_saved,
        })
    }

    /// Apply a keyboard shortcut while answering.
    ///
    /// Keys that do not apply in the current state are ignored.
    ///
    /// # Errors
    ///
    /// Propagates errors from the action the key maps to.
    pub async fn handle_key(
        &self,
        session: &mut QuizSession,
        key: &str,
    ) -> Result<KeyOutcome, QuizError> {
        let Some(command) = KeyCommand::from_key(key) else {
            return Ok(KeyOutcome::Ignored);
        };
        if session.is_finished() || session.mode() != SessionMode::Answering {
            return Ok(KeyOutcome::Ignored);
        }
        let Some(view) = session.question_view() else {
            return Ok(KeyOutcome::Ignored);
        };

        match command {
            KeyCommand::Previous if view.can_go_back => Ok(KeyOutcome::Action(
                self.navigate(session, Direction::Previous).await?,
            )),
            KeyCommand::Next if view.can_go_forward => Ok(KeyOutcome::Action(
                self.navigate(session, Direction::Next).await?,
            )),
            KeyCommand::SelectOption(position) => match view.options.get(position) {
                Some(option) => Ok(KeyOutcome::Action(
                    self.select_option(session, view.question_id, option.weight)
                        .await?,
                )),
                None => Ok(KeyOutcome::Ignored),
            },
            // Unanswered questions elsewhere surface as `IncompleteSubmission`.
            KeyCommand::Confirm if view.is_last && view.selected_weight().is_some() => {
                Ok(KeyOutcome::Submitted(self.submit(session).await?))
            }
            KeyCommand::Confirm if view.can_go_forward => Ok(KeyOutcome::Action(
                self.navigate(session, Direction::Next).await?,
            )),
            _ => Ok(KeyOutcome::Ignored),
        }
    }

    async fn after_move(
        &self,
        session: &QuizSession,
        moved: bool,
    ) -> Result<ActionOutcome, QuizError> {
        let progress = if moved {
            self.snapshot(session.state()).await
        } else {
            ProgressSave::Skipped
        };
        Ok(ActionOutcome {
            changed: moved,
            progress,
            auto_advance: None,
        })
    }

    async fn snapshot(&self, state: &AnswerState) -> ProgressSave {
        match self.progress.save(state).await {
            Ok(()) => ProgressSave::Saved,
            Err(err) => {
                warn!(error = %err, "progress not saved");
                ProgressSave::NotSaved
            }
        }
    }
}
