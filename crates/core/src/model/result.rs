use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::category::{Category, CategoryScores};

/// Scores strictly below this are `NeedsImprovement`.
pub const BALANCED_LOWER_BOUND: f64 = 80.0;
/// Scores at or below this (and at or above the lower bound) are `Balanced`.
pub const BALANCED_UPPER_BOUND: f64 = 130.0;

/// Coarse band derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Balanced Personality")]
    Balanced,
    #[serde(rename = "Strong Professional Personality")]
    StrongProfessional,
}

impl Classification {
    /// Classify a final score; both bounds of the balanced band are inclusive.
    #[must_use]
    pub fn from_score(final_score: f64) -> Self {
        if final_score < BALANCED_LOWER_BOUND {
            Classification::NeedsImprovement
        } else if final_score <= BALANCED_UPPER_BOUND {
            Classification::Balanced
        } else {
            Classification::StrongProfessional
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Classification::NeedsImprovement => "Needs Improvement",
            Classification::Balanced => "Balanced Personality",
            Classification::StrongProfessional => "Strong Professional Personality",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a completed assessment. Built once at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    total_score: u32,
    category_scores: CategoryScores,
    final_score: f64,
    classification: Classification,
    time_taken_seconds: u64,
    timestamp: DateTime<Utc>,
    total_questions: usize,
    answered_questions: usize,
}

impl QuizResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        total_score: u32,
        category_scores: CategoryScores,
        final_score: f64,
        classification: Classification,
        time_taken_seconds: u64,
        timestamp: DateTime<Utc>,
        total_questions: usize,
        answered_questions: usize,
    ) -> Self {
        Self {
            total_score,
            category_scores,
            final_score,
            classification,
            time_taken_seconds,
            timestamp,
            total_questions,
            answered_questions,
        }
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn category_scores(&self) -> &CategoryScores {
        &self.category_scores
    }

    #[must_use]
    pub fn category_score(&self, category: Category) -> u32 {
        self.category_scores.get(category)
    }

    #[must_use]
    pub fn final_score(&self) -> f64 {
        self.final_score
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        self.classification
    }

    #[must_use]
    pub fn time_taken_seconds(&self) -> u64 {
        self.time_taken_seconds
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
    #[must_use]
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn answered_questions(&self) -> usize {
        self.answered_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_band_is_inclusive() {
        assert_eq!(Classification::from_score(79.99), Classification::NeedsImprovement);
        assert_eq!(Classification::from_score(80.0), Classification::Balanced);
        assert_eq!(Classification::from_score(130.0), Classification::Balanced);
        assert_eq!(Classification::from_score(130.01), Classification::StrongProfessional);
    }

    #[test]
    fn classification_serializes_as_label() {
        let json = serde_json::to_string(&Classification::Balanced).unwrap();
        assert_eq!(json, "\"Balanced Personality\"");
        let back: Classification =
            serde_json::from_str("\"Strong Professional Personality\"").unwrap();
        assert_eq!(back, Classification::StrongProfessional);
    }
}
