#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod quiz;
pub mod report;
pub mod result_service;

pub use assessment_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressError, QuizError};
pub use progress_service::ProgressService;
pub use quiz::{
    ActionOutcome, AutoAdvanceOutcome, AutoAdvanceTicket, Direction, KeyOutcome, ProgressSave,
    QuizService, QuizSession, SessionMode, Submission,
};
pub use report::ResultReport;
pub use result_service::ResultService;
