use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Analyzing,
}

impl UiState {
    pub(crate) fn from_flag(in_flight: bool) -> Self {
        if in_flight {
            UiState::Analyzing
        } else {
            UiState::Idle
        }
    }
}

/// Holds the in-flight flag for one request. Dropping it returns the controller to idle,
/// including when the owning future is dropped or unwinds.
pub(crate) struct InFlight<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlight<'a> {
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
