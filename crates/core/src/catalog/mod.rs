//! Ordered, validated question catalog.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::model::{Category, Question, QuestionDraft, QuestionError, QuestionId};

mod data;

use data::{BUNDLED_QUESTIONS, BundledQuestion};

/// Number of questions in the bundled catalog.
pub const STANDARD_QUESTION_COUNT: usize = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no questions")]
    Empty,

    #[error("question at position {position} has id {found}, expected {expected}")]
    NonSequentialId {
        position: usize,
        expected: u32,
        found: QuestionId,
    },

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Read-only, ordered list of questions with ids `1..=N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_bundled(BUNDLED_QUESTIONS).expect("bundled question set should validate")
});

impl Catalog {
    /// Build a catalog from validated questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::NonSequentialId` unless ids run `1..=N` in order.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut positions = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            let expected = u32::try_from(position + 1).unwrap_or(u32::MAX);
            if question.id().value() != expected {
                return Err(CatalogError::NonSequentialId {
                    position,
                    expected,
                    found: question.id(),
                });
            }
            positions.insert(question.id(), position);
        }

        Ok(Self {
            questions,
            positions,
        })
    }

    /// Validate a set of drafts (for example parsed from JSON) into a catalog.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found.
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, CatalogError> {
        let questions = drafts
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    fn from_bundled(bundled: &[BundledQuestion]) -> Result<Self, CatalogError> {
        let mut questions = Vec::with_capacity(bundled.len());
        for raw in bundled {
            let id = QuestionId::new(raw.id);
            let category = raw
                .category
                .parse::<Category>()
                .map_err(|source| QuestionError::UnknownCategory { id, source })?;
            let options = raw
                .options
                .iter()
                .map(|(label, weight)| ((*label).to_owned(), *weight))
                .collect();
            questions.push(Question::new(id, category, raw.prompt, options)?);
        }
        Self::new(questions)
    }

    /// The bundled 50-question soft-skills catalog.
    ///
    /// # Panics
    ///
    /// Panics if the bundled data fails validation; covered by unit tests.
    #[must_use]
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at a zero-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn by_id(&self, id: QuestionId) -> Option<&Question> {
        self.index_of(id).and_then(|i| self.questions.get(i))
    }

    #[must_use]
    pub fn index_of(&self, id: QuestionId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(Question::id)
    }

    /// Number of questions in a category.
    #[must_use]
    pub fn count_in(&self, category: Category) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category() == category)
            .count()
    }

    /// Highest reachable score for a category.
    #[must_use]
    pub fn max_score_in(&self, category: Category) -> u32 {
        self.questions
            .iter()
            .filter(|q| q.category() == category)
            .map(|q| u32::from(q.max_weight()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_fifty_questions() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), STANDARD_QUESTION_COUNT);
        assert_eq!(catalog.get(0).map(Question::id), Some(QuestionId::new(1)));
        assert_eq!(catalog.get(49).map(Question::id), Some(QuestionId::new(50)));
    }

    #[test]
    fn standard_catalog_category_distribution() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.count_in(Category::Communication), 13);
        assert_eq!(catalog.count_in(Category::Leadership), 12);
        assert_eq!(catalog.count_in(Category::StressManagement), 13);
        assert_eq!(catalog.count_in(Category::Teamwork), 12);
        assert_eq!(catalog.max_score_in(Category::Communication), 52);
        assert_eq!(catalog.max_score_in(Category::Teamwork), 48);
    }

    #[test]
    fn standard_catalog_weights_cover_one_to_four() {
        for question in Catalog::standard().questions() {
            let mut weights: Vec<u8> = question.options().iter().map(|o| o.weight()).collect();
            weights.sort_unstable();
            assert_eq!(weights, vec![1, 2, 3, 4], "question {}", question.id());
        }
    }

    #[test]
    fn lookup_by_id_and_index_agree() {
        let catalog = Catalog::standard();
        let id = QuestionId::new(26);
        assert_eq!(catalog.index_of(id), Some(25));
        assert_eq!(
            catalog.by_id(id).map(Question::category),
            Some(Category::StressManagement)
        );
        assert!(catalog.by_id(QuestionId::new(51)).is_none());
    }

    #[test]
    fn rejects_out_of_order_ids() {
        let q = |id: u32| {
            Question::new(
                QuestionId::new(id),
                Category::Teamwork,
                "Prompt",
                (1..=4).map(|w| (format!("o{w}"), w)).collect(),
            )
            .unwrap()
        };
        let err = Catalog::new(vec![q(1), q(3)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::NonSequentialId {
                position: 1,
                expected: 2,
                found: QuestionId::new(3)
            }
        );
        assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn drafts_load_from_json() {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(
            r#"[{
                "id": 1,
                "category": "Leadership",
                "question": "How do you delegate?",
                "options": [
                    {"text": "Never", "weight": 1},
                    {"text": "Rarely", "weight": 2},
                    {"text": "Often", "weight": 3},
                    {"text": "Always", "weight": 4}
                ]
            }]"#,
        )
        .unwrap();
        let catalog = Catalog::from_drafts(drafts).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.count_in(Category::Leadership), 1);
    }
}
