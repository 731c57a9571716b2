use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Coarse polarity reported alongside the emotion breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    /// Any label outside the three known polarities, kept verbatim.
    Other(String),
}

impl Sentiment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Sentiment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Sentiment {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Sentiment> for String {
    fn from(value: Sentiment) -> Self {
        match value {
            Sentiment::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScore {
    pub emotion: String,
    pub score: f64,
}

/// Emotion name to score mapping that remembers the order keys appeared on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotionScores(Vec<EmotionScore>);

impl EmotionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a score; an overwritten key keeps its first position.
    pub fn insert(&mut self, emotion: impl Into<String>, score: f64) {
        let emotion = emotion.into();
        match self.0.iter_mut().find(|entry| entry.emotion == emotion) {
            Some(entry) => entry.score = score,
            None => self.0.push(EmotionScore { emotion, score }),
        }
    }

    pub fn get(&self, emotion: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.emotion == emotion)
            .map(|entry| entry.score)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmotionScore> {
        self.0.iter()
    }

    /// Entries by descending score; equal scores stay in encounter order.
    pub fn ranked(&self) -> Vec<&EmotionScore> {
        let mut ranked: Vec<&EmotionScore> = self.0.iter().collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for EmotionScores {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (emotion, score) in iter {
            scores.insert(emotion, score);
        }
        scores
    }
}

impl Serialize for EmotionScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.emotion, &entry.score)?;
        }
        map.end()
    }
}

struct EmotionScoresVisitor;

impl<'de> Visitor<'de> for EmotionScoresVisitor {
    type Value = EmotionScores;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map of emotion names to scores")
    }

    fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut scores = EmotionScores::new();
        while let Some((emotion, score)) = map.next_entry::<String, f64>()? {
            scores.insert(emotion, score);
        }
        Ok(scores)
    }
}

impl<'de> Deserialize<'de> for EmotionScores {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EmotionScoresVisitor)
    }
}

/// A successful analysis, validated out of the response body.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub primary_emotion: String,
    pub confidence: f64,
    pub sentiment: Sentiment,
    pub emotions: EmotionScores,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_scores_keep_wire_order() {
        let scores: EmotionScores =
            serde_json::from_str(r#"{"sadness":0.1,"joy":0.8,"anger":0.1}"#).expect("decode");
        let names: Vec<&str> = scores.iter().map(|e| e.emotion.as_str()).collect();
        assert_eq!(names, ["sadness", "joy", "anger"]);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let scores: EmotionScores = [("joy", 0.8), ("sadness", 0.1), ("anger", 0.1)]
            .into_iter()
            .collect();
        let ranked: Vec<&str> = scores
            .ranked()
            .into_iter()
            .map(|e| e.emotion.as_str())
            .collect();
        assert_eq!(ranked, ["joy", "sadness", "anger"]);

        let reversed: EmotionScores = [("anger", 0.1), ("sadness", 0.1), ("joy", 0.8)]
            .into_iter()
            .collect();
        let ranked: Vec<&str> = reversed
            .ranked()
            .into_iter()
            .map(|e| e.emotion.as_str())
            .collect();
        assert_eq!(ranked, ["joy", "anger", "sadness"]);
    }

    #[test]
    fn unknown_sentiment_is_kept_verbatim() {
        let sentiment: Sentiment = serde_json::from_str(r#""mixed""#).expect("decode");
        assert_eq!(sentiment, Sentiment::Other("mixed".into()));
        assert_eq!(serde_json::to_string(&sentiment).expect("encode"), r#""mixed""#);
        assert_eq!(Sentiment::from("positive"), Sentiment::Positive);
        assert_eq!(Sentiment::from("Positive"), Sentiment::Other("Positive".into()));
    }
}
