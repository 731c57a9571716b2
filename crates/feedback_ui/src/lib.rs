//! Feedback analysis front-end: controller, view seam, and result presentation.

pub mod controller;
pub mod events;
pub mod presentation;
pub mod state;
pub mod view;

pub use controller::{CycleOutcome, FeedbackAnalysisController};
pub use events::{FeedbackError, Key, KeyChord};
pub use state::UiState;
pub use view::{Element, View};
