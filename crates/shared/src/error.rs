use thiserror::Error;

/// A decoded response body that claims success but lacks result fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed analysis response: missing field `{field}`")]
pub struct MalformedResponse {
    pub field: &'static str,
}

impl MalformedResponse {
    pub fn missing(field: &'static str) -> Self {
        Self { field }
    }
}
