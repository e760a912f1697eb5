use assessment_core::model::{Category, QuestionId};

/// Presentation-agnostic snapshot of the question being answered.
///
/// Carries no pre-formatted strings beyond catalog text; the view decides how
/// to render "Question 3 of 50", badge colours, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub question_id: QuestionId,
    pub index: usize,
    pub total: usize,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<OptionView>,

    pub can_go_back: bool,
    /// Not the last question and the current one is answered.
    pub can_go_forward: bool,
    pub is_last: bool,
    pub can_submit: bool,
}

impl QuestionView {
    /// One-based position for display.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn selected_weight(&self) -> Option<u8> {
        self.options.iter().find(|o| o.selected).map(|o| o.weight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    pub weight: u8,
    pub selected: bool,
    /// Number key that selects this option.
    pub shortcut: char,
}

/// Position and completion counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressView {
    /// One-based position of the current question.
    pub current: usize,
    pub total: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl ProgressView {
    /// `current / total`, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let fraction = self.current as f64 / self.total as f64;
        fraction
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}

/// One row of the review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub index: usize,
    pub question_id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub answered: bool,
    pub answer_label: Option<String>,
    pub is_current: bool,
}

/// Every question with its answered marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub items: Vec<ReviewItem>,
    pub answered: usize,
    pub unanswered: usize,
}
