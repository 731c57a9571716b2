//! HTTP transport for the emotion analysis service.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{AnalyzeRequest, AnalyzeResponse, HealthStatus, ANALYZE_PATH, HEALTH_PATH};
use tracing::{debug, warn};
use url::Url;

pub mod error;

pub use error::TransportError;

/// A decoded `/analyze` reply. `http_ok` is false for non-2xx statuses whose body still decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReply {
    pub http_ok: bool,
    pub body: AnalyzeResponse,
}

impl AnalysisReply {
    pub fn ok(body: AnalyzeResponse) -> Self {
        Self {
            http_ok: true,
            body,
        }
    }
}

#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReply, TransportError>;
    async fn health(&self) -> Result<HealthStatus, TransportError>;
}

pub struct HttpAnalysisClient {
    http: Client,
    analyze_url: Url,
    health_url: Url,
}

impl HttpAnalysisClient {
    pub fn new(server_url: &str) -> Result<Self, TransportError> {
        Self::with_http_client(server_url, Client::new())
    }

    pub fn with_http_client(server_url: &str, http: Client) -> Result<Self, TransportError> {
        let base = base_url(server_url)?;
        Ok(Self {
            http,
            analyze_url: endpoint(&base, ANALYZE_PATH)?,
            health_url: endpoint(&base, HEALTH_PATH)?,
        })
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }
}

fn base_url(server_url: &str) -> Result<Url, TransportError> {
    let trimmed = server_url.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized).map_err(|source| TransportError::InvalidUrl {
        url: server_url.to_string(),
        source,
    })
}

// Joined relative to the base so a path prefix on the server url survives.
fn endpoint(base: &Url, path: &str) -> Result<Url, TransportError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|source| TransportError::InvalidUrl {
            url: base.to_string(),
            source,
        })
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReply, TransportError> {
        let endpoint = self.analyze_url.to_string();
        // reqwest's json() sets `Content-Type: application/json`.
        let res = self
            .http
            .post(self.analyze_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = res.status();
        let bytes = res.bytes().await.map_err(|source| TransportError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;
        let body: AnalyzeResponse =
            serde_json::from_slice(&bytes).map_err(|err| TransportError::Decode {
                endpoint: endpoint.clone(),
                reason: format!("status {status}: {err}"),
            })?;

        if status.is_success() {
            debug!(%endpoint, success = body.success, "analysis reply decoded");
        } else {
            warn!(%endpoint, %status, "analysis service returned error status");
        }

        Ok(AnalysisReply {
            http_ok: status.is_success(),
            body,
        })
    }

    async fn health(&self) -> Result<HealthStatus, TransportError> {
        let endpoint = self.health_url.to_string();
        let res = self
            .http
            .get(self.health_url.clone())
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.clone(),
                source,
            })?;
        let bytes = res.bytes().await.map_err(|source| TransportError::Request {
            endpoint: endpoint.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|err| TransportError::Decode {
            endpoint,
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
