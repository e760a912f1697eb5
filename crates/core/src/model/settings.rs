use thiserror::Error;

/// Storage slot for in-progress answers.
pub const DEFAULT_PROGRESS_KEY: &str = "quizProgress";
/// Storage slot for the last completed result.
pub const DEFAULT_RESULT_KEY: &str = "assessmentResults";
/// Delay between choosing an option and the automatic move to the next question.
pub const DEFAULT_AUTO_ADVANCE_DELAY_MS: u32 = 500;
/// Longest accepted auto-advance delay.
pub const MAX_AUTO_ADVANCE_DELAY_MS: u32 = 10_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("storage key cannot be empty")]
    EmptyKey,

    #[error("progress and result keys must differ")]
    SharedKey,

    #[error("auto-advance delay must be <= {max} ms, got {got}")]
    DelayTooLong { got: u32, max: u32 },
}

/// Behavioural knobs for a quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSettings {
    auto_advance: bool,
    auto_advance_delay_ms: u32,
    progress_key: String,
    result_key: String,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            auto_advance: true,
            auto_advance_delay_ms: DEFAULT_AUTO_ADVANCE_DELAY_MS,
            progress_key: DEFAULT_PROGRESS_KEY.to_owned(),
            result_key: DEFAULT_RESULT_KEY.to_owned(),
        }
    }
}

impl QuizSettings {
    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a key is blank, both keys are equal, or the
    /// delay exceeds `MAX_AUTO_ADVANCE_DELAY_MS`.
    pub fn new(
        auto_advance: bool,
        auto_advance_delay_ms: u32,
        progress_key: impl Into<String>,
        result_key: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let progress_key = progress_key.into();
        let result_key = result_key.into();
        if progress_key.trim().is_empty() || result_key.trim().is_empty() {
            return Err(SettingsError::EmptyKey);
        }
        if progress_key == result_key {
            return Err(SettingsError::SharedKey);
        }
        if auto_advance_delay_ms > MAX_AUTO_ADVANCE_DELAY_MS {
            return Err(SettingsError::DelayTooLong {
                got: auto_advance_delay_ms,
                max: MAX_AUTO_ADVANCE_DELAY_MS,
            });
        }
        Ok(Self {
            auto_advance,
            auto_advance_delay_ms,
            progress_key,
            result_key,
        })
    }

    /// Same settings with auto-advance switched on or off.
    #[must_use]
    pub fn with_auto_advance(mut self, enabled: bool) -> Self {
        self.auto_advance = enabled;
        self
    }

    #[must_use]
    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    #[must_use]
    pub fn auto_advance_delay_ms(&self) -> u32 {
        self.auto_advance_delay_ms
    }

    #[must_use]
    pub fn progress_key(&self) -> &str {
        &self.progress_key
    }

    #[must_use]
    pub fn result_key(&self) -> &str {
        &self.result_key
    }
}
