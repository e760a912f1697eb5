//! Scoring engine: category sums, weighted composite, classification.
//!
//! The composite is
//! `communication*1.2 + leadership*1.5 + stress_management*1.1 + teamwork*1.3`,
//! rounded half-up to two decimals. Coefficients are carried in tenths so the
//! sum is exact before rounding.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::{AnswerState, Category, CategoryScores, Classification, QuizResult};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("cannot submit: {answered} of {total} questions answered")]
    IncompleteSubmission { answered: usize, total: usize },
}

/// Sum chosen weights per category and overall.
///
/// Unanswered questions contribute nothing.
#[must_use]
pub fn category_scores(catalog: &Catalog, state: &AnswerState) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for question in catalog.questions() {
        if let Some(weight) = state.answer_for(question.id()) {
            scores.add(question.category(), u32::from(weight));
        }
    }
    scores
}

/// Weighted composite rounded to two decimals.
#[must_use]
pub fn composite_score(scores: &CategoryScores) -> f64 {
    let tenths: u64 = Category::ALL
        .into_iter()
        .map(|c| u64::from(scores.get(c)) * u64::from(c.coefficient_tenths()))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let raw = tenths as f64 / 10.0;
    round_half_up_2dp(raw)
}

/// Round to two decimals, halves on the third decimal going up.
#[must_use]
pub fn round_half_up_2dp(value: f64) -> f64 {
    let thousandths = (value * 1000.0).round();
    ((thousandths + 5.0) / 10.0).floor() / 100.0
}

/// Whole seconds between `start` and `end`, rounded to nearest, never negative.
#[must_use]
pub fn elapsed_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    u64::try_from((millis + 500) / 1000).unwrap_or(0)
}

/// Score a finished assessment.
///
/// `completed_at` comes from the caller's clock and is used both for the time
/// taken and the result timestamp.
///
/// # Errors
///
/// Returns `ScoringError::IncompleteSubmission` if any catalog question is
/// unanswered; nothing is computed in that case.
pub fn compute_result(
    catalog: &Catalog,
    state: &AnswerState,
    completed_at: DateTime<Utc>,
) -> Result<QuizResult, ScoringError> {
    if !state.is_complete(catalog) {
        return Err(ScoringError::IncompleteSubmission {
            answered: state.answered_count(),
            total: catalog.len(),
        });
    }

    let scores = category_scores(catalog, state);
    let final_score = composite_score(&scores);

    Ok(QuizResult::new(
        scores.total(),
        scores,
        final_score,
        Classification::from_score(final_score),
        elapsed_seconds(state.session_start(), completed_at),
        completed_at,
        catalog.len(),
        state.answered_count(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn answer_all(weight_for: impl Fn(QuestionId, Category) -> u8) -> AnswerState {
        let catalog = Catalog::standard();
        let mut state = AnswerState::new(catalog, fixed_now());
        for q in catalog.questions() {
            state
                .record_answer(catalog, q.id(), weight_for(q.id(), q.category()))
                .unwrap();
        }
        state
    }

    #[test]
    fn all_threes_is_strong_professional() {
        let state = answer_all(|_, _| 3);
        let result = compute_result(
            Catalog::standard(),
            &state,
            fixed_now() + Duration::seconds(95),
        )
        .unwrap();

        assert_eq!(result.category_score(Category::Communication), 39);
        assert_eq!(result.category_score(Category::Leadership), 36);
        assert_eq!(result.category_score(Category::StressManagement), 39);
        assert_eq!(result.category_score(Category::Teamwork), 36);
        assert_eq!(result.total_score(), 150);
        assert!((result.final_score() - 190.5).abs() < 1e-9);
        assert_eq!(result.classification(), Classification::StrongProfessional);
        assert_eq!(result.time_taken_seconds(), 95);
        assert_eq!(result.total_questions(), 50);
        assert_eq!(result.answered_questions(), 50);
    }

    #[test]
    fn exactly_eighty_is_balanced() {
        // Ones everywhere, leadership lifted to 23 (eleven twos and a one).
        let catalog = Catalog::standard();
        let mut state = answer_all(|_, _| 1);
        let leadership: Vec<QuestionId> = catalog
            .questions()
            .iter()
            .filter(|q| q.category() == Category::Leadership)
            .map(|q| q.id())
            .collect();
        for id in leadership.iter().take(11) {
            state.record_answer(catalog, *id, 2).unwrap();
        }

        let result = compute_result(catalog, &state, fixed_now()).unwrap();
        assert_eq!(result.category_score(Category::Leadership), 23);
        assert!((result.final_score() - 80.0).abs() < 1e-9);
        assert_eq!(result.classification(), Classification::Balanced);
    }

    #[test]
    fn exactly_one_thirty_is_balanced() {
        let scores = CategoryScores::new(18, 48, 13, 17);
        let score = composite_score(&scores);
        assert!((score - 130.0).abs() < 1e-9);
        assert_eq!(Classification::from_score(score), Classification::Balanced);
    }

    #[test]
    fn all_ones_needs_improvement() {
        let state = answer_all(|_, _| 1);
        let result = compute_result(Catalog::standard(), &state, fixed_now()).unwrap();
        assert!((result.final_score() - 63.5).abs() < 1e-9);
        assert_eq!(result.classification(), Classification::NeedsImprovement);
    }

    #[test]
    fn incomplete_submission_is_rejected() {
        let catalog = Catalog::standard();
        let mut state = AnswerState::new(catalog, fixed_now());
        for id in catalog.ids().take(49) {
            state.record_answer(catalog, id, 4).unwrap();
        }
        let err = compute_result(catalog, &state, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            ScoringError::IncompleteSubmission {
                answered: 49,
                total: 50
            }
        );
    }

    #[test]
    fn rounding_is_half_up() {
        assert!((round_half_up_2dp(1.005) - 1.01).abs() < 1e-9);
        assert!((round_half_up_2dp(2.344) - 2.34).abs() < 1e-9);
        assert!((round_half_up_2dp(190.5) - 190.5).abs() < 1e-9);
    }

    #[test]
    fn elapsed_rounds_and_never_goes_negative() {
        let start = fixed_now();
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(1_499)), 1);
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(1_500)), 2);
        assert_eq!(elapsed_seconds(start, start - Duration::seconds(30)), 0);
    }
}
