use std::time::Duration;

/// A pending "move to the next question" scheduled after an answer.
///
/// The ticket captures the question index and the session's navigation
/// generation at scheduling time. Firing it only advances when both still
/// match, so any explicit navigation in between wins and a late ticket can
/// never drag the user back to a stale position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceTicket {
    pub(crate) from_index: usize,
    pub(crate) generation: u64,
    pub(crate) delay: Duration,
}

impl AutoAdvanceTicket {
    /// Index that was current when the ticket was issued.
    #[must_use]
    pub fn from_index(&self) -> usize {
        self.from_index
    }

    /// How long the caller should wait before firing.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// What happened when a ticket was fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvanceOutcome {
    Advanced { to_index: usize },
    /// The user navigated, answered again, or the session ended first.
    Stale,
}
