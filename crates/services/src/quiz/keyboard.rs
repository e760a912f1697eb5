/// Keyboard shortcuts understood while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    /// Zero-based option position (keys `1`-`4`).
    SelectOption(usize),
    /// Submit on the last question, otherwise behave like `Next`.
    Confirm,
}

impl KeyCommand {
    /// Map a DOM-style key name (`"ArrowLeft"`, `"3"`, `"Enter"`, ...) to a command.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Enter" => Some(Self::Confirm),
            "1" | "2" | "3" | "4" => key
                .parse::<usize>()
                .ok()
                .map(|n| Self::SelectOption(n - 1)),
            _ => None,
        }
    }
}
