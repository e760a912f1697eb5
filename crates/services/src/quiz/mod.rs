mod auto_advance;
mod keyboard;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use auto_advance::{AutoAdvanceOutcome, AutoAdvanceTicket};
pub use keyboard::KeyCommand;
pub use session::{Direction, QuizSession, SessionMode};
pub use view::{OptionView, ProgressView, QuestionView, ReviewItem, ReviewView};
pub use workflow::{ActionOutcome, KeyOutcome, ProgressSave, QuizService, Submission};
