//! User input events and error modeling for the feedback controller.

use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter some text to analyze.";
pub const SERVICE_FALLBACK_MESSAGE: &str = "Failed to analyze emotions. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Everything that can end an analysis cycle without a result. The `Display` text is what
/// the error region shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation,
    #[error("{0}")]
    Service(String),
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,
}

impl FeedbackError {
    /// Service failure carrying the server's message, or the generic fallback when it sent none.
    pub fn service(message: Option<String>) -> Self {
        match message {
            Some(message) if !message.trim().is_empty() => FeedbackError::Service(message),
            _ => FeedbackError::Service(SERVICE_FALLBACK_MESSAGE.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FeedbackError::Validation => "validation",
            FeedbackError::Service(_) => "service",
            FeedbackError::Network => "network",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl+Enter submits; extra modifiers held alongside Ctrl do not matter.
    pub fn is_submit_shortcut(&self) -> bool {
        self.key == Key::Enter && self.ctrl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_falls_back_on_missing_or_blank_message() {
        assert_eq!(
            FeedbackError::service(Some("rate limited".into())).to_string(),
            "rate limited"
        );
        assert_eq!(
            FeedbackError::service(None).to_string(),
            SERVICE_FALLBACK_MESSAGE
        );
        assert_eq!(
            FeedbackError::service(Some(String::new())).to_string(),
            SERVICE_FALLBACK_MESSAGE
        );
    }

    #[test]
    fn only_ctrl_enter_is_the_submit_shortcut() {
        assert!(KeyChord::new(Key::Enter).with_ctrl().is_submit_shortcut());
        assert!(KeyChord::new(Key::Enter)
            .with_ctrl()
            .with_shift()
            .is_submit_shortcut());
        assert!(!KeyChord::new(Key::Enter).is_submit_shortcut());
        assert!(!KeyChord::new(Key::Enter).with_shift().is_submit_shortcut());
        assert!(!KeyChord::new(Key::Enter).with_meta().is_submit_shortcut());
        assert!(!KeyChord::new(Key::Char('a')).with_ctrl().is_submit_shortcut());
    }
}
