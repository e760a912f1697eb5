use assessment_core::Catalog;
use assessment_core::model::{Category, Classification, QuizResult};

/// Score line for one category on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLine {
    pub category: Category,
    pub score: u32,
    pub max: u32,
    /// Whole-number percentage of `max`.
    pub percent: u32,
}

/// Results-screen data derived from a `QuizResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultReport {
    pub categories: Vec<CategoryLine>,
    pub total_score: u32,
    pub final_score: f64,
    pub classification: Classification,
    pub duration: String,
    pub completed_at: String,
    pub answered: usize,
    pub total_questions: usize,
}

impl ResultReport {
    #[must_use]
    pub fn new(catalog: &Catalog, result: &QuizResult) -> Self {
        let categories = Category::ALL
            .into_iter()
            .map(|category| {
                let score = result.category_score(category);
                let max = catalog.max_score_in(category);
                CategoryLine {
                    category,
                    score,
                    max,
                    percent: percent_of(score, max),
                }
            })
            .collect();

        Self {
            categories,
            total_score: result.total_score(),
            final_score: result.final_score(),
            classification: result.classification(),
            duration: format_duration(result.time_taken_seconds()),
            completed_at: result.timestamp_iso(),
            answered: result.answered_questions(),
            total_questions: result.total_questions(),
        }
    }

    /// Category with the highest share of its maximum; first wins ties.
    #[must_use]
    pub fn strongest(&self) -> Option<&CategoryLine> {
        self.categories
            .iter()
            .reduce(|best, line| if line.percent > best.percent { line } else { best })
    }
}

/// Rounded percentage, half away from zero.
#[must_use]
pub fn percent_of(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let score = u64::from(score);
    let max = u64::from(max);
    u32::try_from((score * 200 + max) / (2 * max)).unwrap_or(u32::MAX)
}

/// `"{minutes}m {seconds}s"`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}
