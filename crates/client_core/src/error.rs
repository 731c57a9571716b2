use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid analysis service url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("undecodable response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}
