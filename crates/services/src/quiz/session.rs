use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use assessment_core::Catalog;
use assessment_core::model::{AnswerState, Question, QuestionId};

use super::auto_advance::{AutoAdvanceOutcome, AutoAdvanceTicket};
use super::view::{OptionView, ProgressView, QuestionView, ReviewItem, ReviewView};
use crate::error::QuizError;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Answering,
    Reviewing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One attempt at the assessment, from start or resume until submission.
///
/// Holds the only copy of the answer state. Mutations go through
/// `QuizService`, which snapshots progress after each one.
pub struct QuizSession {
    catalog: Arc<Catalog>,
    state: AnswerState,
    mode: SessionMode,
    generation: u64,
    finished: bool,
    resumed: bool,
}

impl QuizSession {
    pub(crate) fn new(catalog: Arc<Catalog>, state: AnswerState, resumed: bool) -> Self {
        Self {
            catalog,
            state,
            mode: SessionMode::Answering,
            generation: 0,
            finished: false,
            resumed,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &AnswerState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// True if this session was restored from a saved snapshot.
    #[must_use]
    pub fn was_resumed(&self) -> bool {
        self.resumed
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.catalog.get(self.state.current_index())
    }

    #[must_use]
    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.state.is_answered(question_id)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete(&self.catalog)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.finished && self.is_complete()
    }

    /// Whether leaving now would abandon answers the user has given.
    #[must_use]
    pub fn has_unsaved_answers(&self) -> bool {
        !self.finished && self.state.answered_count() > 0
    }

    #[must_use]
    pub fn progress(&self) -> ProgressView {
        ProgressView {
            current: self.state.current_index() + 1,
            total: self.catalog.len(),
            answered: self.state.answered_count(),
            is_complete: self.is_complete(),
        }
    }

    /// Snapshot of the current question, its options, and navigation flags.
    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        let index = self.state.current_index();
        let question = self.catalog.get(index)?;
        let selected = self.state.answer_for(question.id());
        let answered = selected.is_some();
        let is_last = self.state.is_last();

        let options = question
            .options()
            .iter()
            .zip(['1', '2', '3', '4'])
            .map(|(option, shortcut)| OptionView {
                label: option.label().to_owned(),
                weight: option.weight(),
                selected: selected == Some(option.weight()),
                shortcut,
            })
            .collect();

        Some(QuestionView {
            question_id: question.id(),
            index,
            total: self.catalog.len(),
            category: question.category(),
            prompt: question.prompt().to_owned(),
            options,
            can_go_back: !self.state.is_first(),
            can_go_forward: answered && !is_last,
            is_last,
            can_submit: self.can_submit(),
        })
    }

    /// Every question with its answered marker.
    #[must_use]
    pub fn review(&self) -> ReviewView {
        let current = self.state.current_index();
        let items: Vec<ReviewItem> = self
            .catalog
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen = self.state.answer_for(question.id());
                ReviewItem {
                    index,
                    question_id: question.id(),
                    category: question.category(),
                    prompt: question.prompt().to_owned(),
                    answered: chosen.is_some(),
                    answer_label: chosen
                        .and_then(|w| question.option_for(w))
                        .map(|o| o.label().to_owned()),
                    is_current: index == current,
                }
            })
            .collect();
        let answered = items.iter().filter(|i| i.answered).count();
        let unanswered = items.len() - answered;
        ReviewView {
            items,
            answered,
            unanswered,
        }
    }

    fn ensure_active(&self) -> Result<(), QuizError> {
        if self.finished {
            return Err(QuizError::Finished);
        }
        Ok(())
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub(crate) fn record(&mut self, question_id: QuestionId, weight: u8) -> Result<bool, QuizError> {
        self.ensure_active()?;
        Ok(self.state.record_answer(&self.catalog, question_id, weight)?)
    }

    /// Step one question; explicit navigation cancels any pending auto-advance.
    pub(crate) fn navigate(&mut self, direction: Direction) -> Result<bool, QuizError> {
        self.ensure_active()?;
        self.bump_generation();
        self.mode = SessionMode::Answering;
        Ok(match direction {
            Direction::Previous => self.state.retreat(),
            Direction::Next => self.state.advance(),
        })
    }

    pub(crate) fn jump(&mut self, index: usize) -> Result<(), QuizError> {
        self.ensure_active()?;
        self.state.jump_to(index)?;
        self.bump_generation();
        self.mode = SessionMode::Answering;
        Ok(())
    }

    pub(crate) fn open_review(&mut self) -> Result<(), QuizError> {
        self.ensure_active()?;
        self.bump_generation();
        self.mode = SessionMode::Reviewing;
        Ok(())
    }

    pub(crate) fn close_review(&mut self) -> Result<(), QuizError> {
        self.ensure_active()?;
        self.mode = SessionMode::Answering;
        Ok(())
    }

    /// Issue a ticket for the current position unless already on the last question.
    pub(crate) fn schedule_auto_advance(&mut self, delay: Duration) -> Option<AutoAdvanceTicket> {
        self.bump_generation();
        if self.finished || self.state.is_last() {
            return None;
        }
        Some(AutoAdvanceTicket {
            from_index: self.state.current_index(),
            generation: self.generation,
            delay,
        })
    }

    pub(crate) fn cancel_auto_advance(&mut self) {
        self.bump_generation();
    }

    pub(crate) fn fire(&mut self, ticket: AutoAdvanceTicket) -> AutoAdvanceOutcome {
        let still_valid = !self.finished
            && self.mode == SessionMode::Answering
            && ticket.generation == self.generation
            && ticket.from_index == self.state.current_index();
        if !still_valid || !self.state.advance() {
            return AutoAdvanceOutcome::Stale;
        }
        self.bump_generation();
        AutoAdvanceOutcome::Advanced {
            to_index: self.state.current_index(),
        }
    }

    pub(crate) fn finish(&mut self) {
        self.bump_generation();
        self.finished = true;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.catalog.len())
            .field("answered", &self.state.answered_count())
            .field("current_index", &self.state.current_index())
            .field("mode", &self.mode)
            .field("finished", &self.finished)
            .field("resumed", &self.resumed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
