//! Deterministic mapping from an analysis result to what the view displays, plus the fixed
//! icon and sentiment lookup tables.

use shared::domain::{AnalysisResult, Sentiment};

pub const NO_EMOTIONS_MESSAGE: &str = "No specific emotions detected.";
pub const IDLE_BUTTON_LABEL: &str = "Analyze Emotions";
pub const BUSY_BUTTON_LABEL: &str = "Analyzing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Laugh,
    SadTear,
    Angry,
    Fearful,
    Dizzy,
    Meh,
    Smile,
    Frown,
    Question,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Laugh => "😆",
            Icon::SadTear => "😢",
            Icon::Angry => "😠",
            Icon::Fearful => "😨",
            Icon::Dizzy => "😵",
            Icon::Meh => "😐",
            Icon::Smile => "🙂",
            Icon::Frown => "🙁",
            Icon::Question => "❓",
        }
    }
}

pub const EMOTION_ICONS: &[(&str, Icon)] = &[
    ("joy", Icon::Laugh),
    ("sadness", Icon::SadTear),
    ("anger", Icon::Angry),
    ("fear", Icon::Fearful),
    ("disgust", Icon::Dizzy),
    ("neutral", Icon::Meh),
];

pub const FALLBACK_EMOTION_ICON: Icon = Icon::Question;

pub fn emotion_icon(emotion: &str) -> Icon {
    EMOTION_ICONS
        .iter()
        .find(|(name, _)| *name == emotion)
        .map(|(_, icon)| *icon)
        .unwrap_or(FALLBACK_EMOTION_ICON)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentTreatment {
    pub tone: Tone,
    pub color: &'static str,
    pub icon: Icon,
}

pub const NEUTRAL_TREATMENT: SentimentTreatment = SentimentTreatment {
    tone: Tone::Neutral,
    color: "#6c757d",
    icon: Icon::Meh,
};

pub const SENTIMENT_TREATMENTS: &[(&str, SentimentTreatment)] = &[
    (
        "positive",
        SentimentTreatment {
            tone: Tone::Positive,
            color: "#28a745",
            icon: Icon::Smile,
        },
    ),
    (
        "negative",
        SentimentTreatment {
            tone: Tone::Negative,
            color: "#dc3545",
            icon: Icon::Frown,
        },
    ),
    ("neutral", NEUTRAL_TREATMENT),
];

pub fn sentiment_treatment(sentiment: &Sentiment) -> SentimentTreatment {
    SENTIMENT_TREATMENTS
        .iter()
        .find(|(name, _)| *name == sentiment.as_str())
        .map(|(_, treatment)| *treatment)
        .unwrap_or(NEUTRAL_TREATMENT)
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `score` as a percentage rounded half up to one decimal place. Non-finite scores read as 0.
pub fn rounded_percent(score: f64) -> f64 {
    let percent = score * 100.0;
    if !percent.is_finite() {
        return 0.0;
    }
    (percent * 10.0).round() / 10.0
}

pub fn percent_text(score: f64) -> String {
    format!("{:.1}%", rounded_percent(score))
}

/// Bar width in percent: the same value [`percent_text`] shows, clamped to the bar.
pub fn bar_width(score: f64) -> f64 {
    rounded_percent(score).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmotionRow {
    pub emotion: String,
    pub label: String,
    pub icon: Icon,
    pub percent: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmotionsDisplay {
    Placeholder(&'static str),
    Rows(Vec<EmotionRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub primary_emotion: String,
    pub confidence_text: String,
    pub confidence_width: f64,
    pub sentiment_label: String,
    pub treatment: SentimentTreatment,
    pub emotions: EmotionsDisplay,
}

pub fn summarize(result: &AnalysisResult) -> ResultSummary {
    let emotions = if result.emotions.is_empty() {
        EmotionsDisplay::Placeholder(NO_EMOTIONS_MESSAGE)
    } else {
        EmotionsDisplay::Rows(
            result
                .emotions
                .ranked()
                .into_iter()
                .map(|entry| EmotionRow {
                    emotion: entry.emotion.clone(),
                    label: capitalize(&entry.emotion),
                    icon: emotion_icon(&entry.emotion),
                    percent: percent_text(entry.score),
                    width: bar_width(entry.score),
                })
                .collect(),
        )
    };

    ResultSummary {
        primary_emotion: capitalize(&result.primary_emotion),
        confidence_text: percent_text(result.confidence),
        confidence_width: bar_width(result.confidence),
        sentiment_label: capitalize(result.sentiment.as_str()),
        treatment: sentiment_treatment(&result.sentiment),
        emotions,
    }
}
