//! Matchmaking service API client
//!
//! One `reqwest` client, one round-trip per operation. Response
//! classification that needs no network (error-message extraction, list
//! body normalization) lives in free functions so it can be tested
//! deterministically.

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use quadral_common::api::{
    ClusterSummary, CreateUserRequest, CreateUserResponse, FindOrCreateRequest,
    FindOrCreateResponse, HealthResponse, JoinClusterRequest,
};
use quadral_common::socionics::Quadra;

const USER_AGENT: &str = concat!("quadral-ui/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Matchmaking client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Terminal classification of a join attempt's round-trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinReply {
    Accepted,
    /// The slot for the caller's TIM is already occupied (or the cluster is
    /// full) — a distinct outcome, never merged with generic failure
    SlotTaken,
}

/// Matchmaking service client
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Register a profile, creating the identity this client caches
    pub async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<CreateUserResponse, ClientError> {
        let url = format!("{}/users", self.base_url);
        tracing::debug!(url = %url, tim = %request.socionics_type, "Registering profile");

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body: Option<Value> = response.json().await.ok();
        if !status.is_success() {
            return Err(api_error(status, body.as_ref()));
        }

        let body = body.ok_or_else(|| ClientError::Parse("empty response body".to_string()))?;
        let created: CreateUserResponse =
            serde_json::from_value(body).map_err(|e| ClientError::Parse(e.to_string()))?;

        tracing::info!(
            user_id = created.id,
            tim = %created.socionics_type,
            "Profile registered"
        );
        Ok(created)
    }

    /// List clusters of the quadra that still have a free slot for `tim`
    ///
    /// The service excludes clusters already holding a member of the
    /// caller's TIM; the client renders whatever comes back without
    /// re-filtering.
    pub async fn open_clusters(
        &self,
        quadra: Quadra,
        tim: &str,
        limit: u32,
    ) -> Result<Vec<ClusterSummary>, ClientError> {
        let url = format!("{}/clusters/open", self.base_url);
        tracing::debug!(url = %url, quadra = %quadra, tim = %tim, limit, "Listing open clusters");

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("quadra", quadra.as_str()),
                ("tim", tim),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            return Err(api_error(status, body.as_ref()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        clusters_from_body(body)
    }

    /// Attempt to claim the caller's slot in one specific cluster.
    ///
    /// A single round-trip with no automatic retry; HTTP 409 classifies as
    /// `SlotTaken`.
    pub async fn join_cluster(
        &self,
        request: &JoinClusterRequest,
    ) -> Result<JoinReply, ClientError> {
        let url = format!("{}/clusters/join", self.base_url);
        tracing::debug!(url = %url, cluster_id = request.cluster_id, "Joining cluster");

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Ok(JoinReply::SlotTaken);
        }
        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            return Err(api_error(status, body.as_ref()));
        }

        tracing::info!(cluster_id = request.cluster_id, "Joined cluster");
        Ok(JoinReply::Accepted)
    }

    /// Ask the service to complete an existing partial cluster or report
    /// which TIMs are still needed. Idempotent server-side; issued here as a
    /// plain request/response, never polled.
    pub async fn find_or_create(
        &self,
        request: &FindOrCreateRequest,
    ) -> Result<FindOrCreateResponse, ClientError> {
        let url = format!("{}/clusters/find_or_create", self.base_url);
        tracing::debug!(url = %url, quadra = %request.quadra, "Negotiating cluster");

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body: Option<Value> = response.json().await.ok();
        if !status.is_success() {
            return Err(api_error(status, body.as_ref()));
        }

        let body = body.ok_or_else(|| ClientError::Parse("empty response body".to_string()))?;
        serde_json::from_value(body).map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            return Err(api_error(status, body.as_ref()));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

fn api_error(status: StatusCode, body: Option<&Value>) -> ClientError {
    ClientError::Api {
        status: status.as_u16(),
        message: error_message(status, body),
    }
}

/// Extract the most specific failure message the service provided.
///
/// Ordered fallback: structured `detail`, then `reason`, then `message`
/// fields of the body, then the transport's own status text.
pub fn error_message(status: StatusCode, body: Option<&Value>) -> String {
    for key in ["detail", "reason", "message"] {
        if let Some(text) = body.and_then(|b| b.get(key)).and_then(Value::as_str) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// Normalize an open-clusters body into a cluster list.
///
/// A null or non-array body counts as zero results, not a failure.
pub fn clusters_from_body(body: Value) -> Result<Vec<ClusterSummary>, ClientError> {
    match body {
        Value::Array(_) => {
            serde_json::from_value(body).map_err(|e| ClientError::Parse(e.to_string()))
        }
        _ => Ok(Vec::new()),
    }
}
