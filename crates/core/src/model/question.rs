use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::{Category, UnknownCategory};
use crate::model::ids::QuestionId;

/// Number of options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: prompt cannot be empty")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: expected 4 options, found {found}")]
    WrongOptionCount { id: QuestionId, found: usize },

    #[error("question {id}: option label cannot be empty")]
    EmptyOptionLabel { id: QuestionId },

    #[error("question {id}: option weight must be > 0")]
    NonPositiveWeight { id: QuestionId },

    #[error("question {id}: weight {weight} appears more than once")]
    DuplicateWeight { id: QuestionId, weight: u8 },

    #[error("question {id}: {source}")]
    UnknownCategory {
        id: QuestionId,
        #[source]
        source: UnknownCategory,
    },
}

//
// ─── OPTION ────────────────────────────────────────────────────────────────────
//

/// One selectable answer with its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOption {
    label: String,
    weight: u8,
}

impl QuestionOption {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn weight(&self) -> u8 {
        self.weight
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A validated catalog question. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    category: Category,
    prompt: String,
    options: Vec<QuestionOption>,
}

impl Question {
    /// Build a question from its parts.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or any label is blank, the option
    /// count is not four, or weights are zero or repeated.
    pub fn new(
        id: QuestionId,
        category: Category,
        prompt: impl Into<String>,
        options: Vec<(String, u8)>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        if options.len() != OPTIONS_PER_QUESTION {
            return Err(QuestionError::WrongOptionCount {
                id,
                found: options.len(),
            });
        }

        let mut validated: Vec<QuestionOption> = Vec::with_capacity(OPTIONS_PER_QUESTION);
        for (label, weight) in options {
            if label.trim().is_empty() {
                return Err(QuestionError::EmptyOptionLabel { id });
            }
            if weight == 0 {
                return Err(QuestionError::NonPositiveWeight { id });
            }
            if validated.iter().any(|o| o.weight == weight) {
                return Err(QuestionError::DuplicateWeight { id, weight });
            }
            validated.push(QuestionOption { label, weight });
        }

        Ok(Self {
            id,
            category,
            prompt,
            options: validated,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    /// True if `weight` belongs to one of this question's own options.
    #[must_use]
    pub fn accepts(&self, weight: u8) -> bool {
        self.option_for(weight).is_some()
    }

    #[must_use]
    pub fn option_for(&self, weight: u8) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.weight == weight)
    }

    /// Highest weight reachable on this question.
    #[must_use]
    pub fn max_weight(&self) -> u8 {
        self.options.iter().map(|o| o.weight).max().unwrap_or(0)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question shape, as found in JSON question sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub id: u32,
    pub category: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<OptionDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDraft {
    #[serde(rename = "text")]
    pub label: String,
    pub weight: u8,
}

impl QuestionDraft {
    /// Validate into a `Question`, rejecting unrecognized categories.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` for any structural defect.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id);
        let category = self
            .category
            .parse::<Category>()
            .map_err(|source| QuestionError::UnknownCategory { id, source })?;
        let options = self
            .options
            .into_iter()
            .map(|o| (o.label, o.weight))
            .collect();
        Question::new(id, category, self.prompt, options)
    }
}
