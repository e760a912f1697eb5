mod answers;
mod category;
mod ids;
mod question;
mod result;
mod settings;

pub use ids::{ParseIdError, QuestionId};

pub use answers::{AnswerError, AnswerState};
pub use category::{Category, CategoryScores, UnknownCategory};
pub use question::{
    OPTIONS_PER_QUESTION, OptionDraft, Question, QuestionDraft, QuestionError, QuestionOption,
};
pub use result::{BALANCED_LOWER_BOUND, BALANCED_UPPER_BOUND, Classification, QuizResult};
pub use settings::{
    DEFAULT_AUTO_ADVANCE_DELAY_MS, DEFAULT_PROGRESS_KEY, DEFAULT_RESULT_KEY,
    MAX_AUTO_ADVANCE_DELAY_MS, QuizSettings, SettingsError,
};
