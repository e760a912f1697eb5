use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{AnswerError, QuestionError, SettingsError};
use crate::scoring::ScoringError;

/// Any error raised by the assessment domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use crate::model::{AnswerState, QuestionId};
    use crate::time::fixed_now;

    fn answer_then_settle(weight: u8) -> Result<usize, Error> {
        let catalog = Catalog::standard();
        let mut state = AnswerState::new(catalog, fixed_now());
        state.record_answer(catalog, QuestionId::new(1), weight)?;
        state.jump_to(60)?;
        Ok(state.current_index())
    }

    #[test]
    fn domain_errors_convert_with_question_mark() {
        assert!(matches!(
            answer_then_settle(9),
            Err(Error::Answer(AnswerError::InvalidWeight { weight: 9, .. }))
        ));
        assert!(matches!(
            answer_then_settle(2),
            Err(Error::Answer(AnswerError::OutOfRange { index: 60, len: 50 }))
        ));
    }

    #[test]
    fn empty_catalog_is_reported() {
        let err: Error = Catalog::new(Vec::new()).unwrap_err().into();
        assert_eq!(err, Error::Catalog(CatalogError::Empty));
    }
}
