use serde::{Deserialize, Serialize};

use crate::{
    domain::{AnalysisResult, EmotionScores, Sentiment},
    error::MalformedResponse,
};

pub const ANALYZE_PATH: &str = "/analyze";
pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body returned by `POST /analyze`, covering both the success and failure shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotions: Option<EmotionScores>,
}

impl AnalyzeResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Extracts the result fields of a success body. An absent `emotions` map is empty.
    pub fn into_result(self) -> Result<AnalysisResult, MalformedResponse> {
        Ok(AnalysisResult {
            primary_emotion: self
                .primary_emotion
                .ok_or(MalformedResponse::missing("primary_emotion"))?,
            confidence: self
                .confidence
                .ok_or(MalformedResponse::missing("confidence"))?,
            sentiment: self
                .sentiment
                .ok_or(MalformedResponse::missing("sentiment"))?,
            emotions: self.emotions.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_encodes_as_text_object() {
        let body = serde_json::to_value(AnalyzeRequest::new("great service")).expect("encode");
        assert_eq!(body, serde_json::json!({ "text": "great service" }));
    }

    #[test]
    fn success_body_ignores_extra_fields() {
        let raw = r#"{
            "success": true,
            "text": "I love it",
            "emotions": {"joy": 0.3},
            "primary_emotion": "joy",
            "confidence": 0.3,
            "sentiment": "positive",
            "analysis_timestamp": null
        }"#;
        let response: AnalyzeResponse = serde_json::from_str(raw).expect("decode");
        let result = response.into_result().expect("result");
        assert_eq!(result.primary_emotion, "joy");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.emotions.get("joy"), Some(0.3));
    }

    #[test]
    fn failure_body_without_success_flag_decodes() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"error": "No text provided"}"#).expect("decode");
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("No text provided"));
    }

    #[test]
    fn success_body_missing_confidence_is_malformed() {
        let response: AnalyzeResponse = serde_json::from_str(
            r#"{"success": true, "primary_emotion": "joy", "sentiment": "positive"}"#,
        )
        .expect("decode");
        assert_eq!(
            response.into_result(),
            Err(MalformedResponse::missing("confidence"))
        );
    }

    #[test]
    fn missing_emotions_map_is_empty() {
        let response: AnalyzeResponse = serde_json::from_str(
            r#"{"success": true, "primary_emotion": "neutral", "confidence": 0.0, "sentiment": "neutral"}"#,
        )
        .expect("decode");
        assert!(response.into_result().expect("result").emotions.is_empty());
    }
}
