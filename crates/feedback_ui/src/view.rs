//! The narrow surface the controller drives. Implementations own the actual widgets.

use crate::presentation::{EmotionsDisplay, SentimentTreatment};

/// Stable identifiers of the page regions the controller reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    FeedbackInput,
    AnalyzeButton,
    Loading,
    ErrorMessage,
    ResultSection,
    PrimaryEmotion,
    ConfidenceScore,
    ConfidenceBar,
    OverallSentiment,
    EmotionsList,
}

impl Element {
    pub fn id(self) -> &'static str {
        match self {
            Element::FeedbackInput => "feedbackText",
            Element::AnalyzeButton => "analyzeBtn",
            Element::Loading => "loading",
            Element::ErrorMessage => "errorMessage",
            Element::ResultSection => "resultSection",
            Element::PrimaryEmotion => "primaryEmotion",
            Element::ConfidenceScore => "confidenceScore",
            Element::ConfidenceBar => "confidenceBar",
            Element::OverallSentiment => "overallSentiment",
            Element::EmotionsList => "emotionsList",
        }
    }
}

pub trait View: Send {
    /// Current raw contents of [`Element::FeedbackInput`].
    fn input_text(&self) -> String;
    fn set_text(&mut self, element: Element, text: &str);
    fn set_width_percent(&mut self, element: Element, percent: f64);
    fn set_visible(&mut self, element: Element, visible: bool);
    fn set_enabled(&mut self, element: Element, enabled: bool);
    fn set_treatment(&mut self, element: Element, treatment: SentimentTreatment);
    fn set_emotions(&mut self, emotions: &EmotionsDisplay);
    fn scroll_into_view(&mut self, _element: Element) {}
}
