use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("weight {weight} is not an option of question {question_id}")]
    InvalidWeight { question_id: QuestionId, weight: u8 },

    #[error("question {0} is not in the catalog")]
    UnknownQuestion(QuestionId),

    #[error("index {index} is outside 0..{len}")]
    OutOfRange { index: usize, len: usize },
}

//
// ─── ANSWER STATE ──────────────────────────────────────────────────────────────
//

/// Answers given so far, the current position, and when the session began.
///
/// Every stored weight belongs to its own question's option set, and
/// `current_index` always lies in `0..question_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerState {
    answers: BTreeMap<QuestionId, u8>,
    current_index: usize,
    question_count: usize,
    session_start: DateTime<Utc>,
}

impl AnswerState {
    /// Fresh state positioned on the first question.
    #[must_use]
    pub fn new(catalog: &Catalog, session_start: DateTime<Utc>) -> Self {
        Self {
            answers: BTreeMap::new(),
            current_index: 0,
            question_count: catalog.len(),
            session_start,
        }
    }

    /// Rehydrate a state from persisted parts, re-checking every invariant
    /// against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownQuestion` or `AnswerError::InvalidWeight` for
    /// answers that do not fit the catalog, and `AnswerError::OutOfRange` for a
    /// bad index.
    pub fn from_persisted(
        catalog: &Catalog,
        answers: BTreeMap<QuestionId, u8>,
        current_index: usize,
        session_start: DateTime<Utc>,
    ) -> Result<Self, AnswerError> {
        for (&question_id, &weight) in &answers {
            let question = catalog
                .by_id(question_id)
                .ok_or(AnswerError::UnknownQuestion(question_id))?;
            if !question.accepts(weight) {
                return Err(AnswerError::InvalidWeight {
                    question_id,
                    weight,
                });
            }
        }
        if current_index >= catalog.len() {
            return Err(AnswerError::OutOfRange {
                index: current_index,
                len: catalog.len(),
            });
        }

        Ok(Self {
            answers,
            current_index,
            question_count: catalog.len(),
            session_start,
        })
    }

    /// Record (or overwrite) the answer for a question.
    ///
    /// Returns `true` when the stored weight changed.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownQuestion` if the id is not in the catalog and
    /// `AnswerError::InvalidWeight` if the weight is not one of that question's
    /// options. The state is left untouched on error.
    pub fn record_answer(
        &mut self,
        catalog: &Catalog,
        question_id: QuestionId,
        weight: u8,
    ) -> Result<bool, AnswerError> {
        let question = catalog
            .by_id(question_id)
            .ok_or(AnswerError::UnknownQuestion(question_id))?;
        if !question.accepts(weight) {
            return Err(AnswerError::InvalidWeight {
                question_id,
                weight,
            });
        }
        let previous = self.answers.insert(question_id, weight);
        Ok(previous != Some(weight))
    }

    #[must_use]
    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.answers.contains_key(&question_id)
    }

    #[must_use]
    pub fn answer_for(&self, question_id: QuestionId) -> Option<u8> {
        self.answers.get(&question_id).copied()
    }

    /// True iff every catalog question has an answer.
    #[must_use]
    pub fn is_complete(&self, catalog: &Catalog) -> bool {
        catalog.ids().all(|id| self.answers.contains_key(&id))
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, u8> {
        &self.answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.question_count
    }

    #[must_use]
    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    /// Move forward one question. Returns `false` at the last question.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Move back one question. Returns `false` at the first question.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Position on an arbitrary question.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::OutOfRange` unless `index < question_count`.
    pub fn jump_to(&mut self, index: usize) -> Result<(), AnswerError> {
        if index >= self.question_count {
            return Err(AnswerError::OutOfRange {
                index,
                len: self.question_count,
            });
        }
        self.current_index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn state() -> AnswerState {
        AnswerState::new(Catalog::standard(), fixed_now())
    }

    #[test]
    fn records_valid_answer() {
        let catalog = Catalog::standard();
        let mut s = state();
        assert!(s.record_answer(catalog, QuestionId::new(1), 3).unwrap());
        assert!(s.is_answered(QuestionId::new(1)));
        assert_eq!(s.answer_for(QuestionId::new(1)), Some(3));
    }

    #[test]
    fn overwrite_replaces_and_repeat_is_unchanged() {
        let catalog = Catalog::standard();
        let mut s = state();
        s.record_answer(catalog, QuestionId::new(4), 2).unwrap();
        assert!(s.record_answer(catalog, QuestionId::new(4), 4).unwrap());
        assert!(!s.record_answer(catalog, QuestionId::new(4), 4).unwrap());
        assert_eq!(s.answer_for(QuestionId::new(4)), Some(4));
        assert_eq!(s.answered_count(), 1);
    }

    #[test]
    fn invalid_weight_leaves_state_unchanged() {
        let catalog = Catalog::standard();
        let mut s = state();
        s.record_answer(catalog, QuestionId::new(2), 1).unwrap();
        let before = s.clone();

        let err = s.record_answer(catalog, QuestionId::new(2), 9).unwrap_err();
        assert_eq!(
            err,
            AnswerError::InvalidWeight {
                question_id: QuestionId::new(2),
                weight: 9
            }
        );
        assert_eq!(s, before);

        let err = s.record_answer(catalog, QuestionId::new(99), 1).unwrap_err();
        assert_eq!(err, AnswerError::UnknownQuestion(QuestionId::new(99)));
        assert_eq!(s, before);
    }

    #[test]
    fn navigation_clamps_at_boundaries() {
        let mut s = state();
        assert!(!s.retreat());
        assert_eq!(s.current_index(), 0);

        s.jump_to(49).unwrap();
        assert!(!s.advance());
        assert_eq!(s.current_index(), 49);

        assert!(s.retreat());
        assert_eq!(s.current_index(), 48);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut s = state();
        s.jump_to(10).unwrap();
        let err = s.jump_to(50).unwrap_err();
        assert_eq!(err, AnswerError::OutOfRange { index: 50, len: 50 });
        assert_eq!(s.current_index(), 10);
    }

    #[test]
    fn complete_only_when_every_question_answered() {
        let catalog = Catalog::standard();
        let mut s = state();
        for id in catalog.ids().take(49) {
            s.record_answer(catalog, id, 2).unwrap();
        }
        assert!(!s.is_complete(catalog));
        s.record_answer(catalog, QuestionId::new(50), 2).unwrap();
        assert!(s.is_complete(catalog));
    }

    #[test]
    fn from_persisted_rejects_foreign_weights() {
        let catalog = Catalog::standard();
        let mut answers = BTreeMap::new();
        answers.insert(QuestionId::new(3), 7);
        let err = AnswerState::from_persisted(catalog, answers, 0, fixed_now()).unwrap_err();
        assert!(matches!(err, AnswerError::InvalidWeight { weight: 7, .. }));

        let err =
            AnswerState::from_persisted(catalog, BTreeMap::new(), 50, fixed_now()).unwrap_err();
        assert_eq!(err, AnswerError::OutOfRange { index: 50, len: 50 });
    }
}
