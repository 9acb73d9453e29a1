//! Wire request/response types for the matchmaking service
//!
//! These mirror the service's JSON contract. Fields the service may omit or
//! that carry values outside the client's control (member type codes of
//! clusters it did not assemble) stay loosely typed so a response is always
//! renderable; fields the client itself originates are strongly typed.

use serde::{Deserialize, Serialize};

use crate::socionics::{Quadra, SocType};

/// One occupied slot in a cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub user_id: i64,
    /// TIM of the occupying member, as reported by the service
    pub socionics_type: String,
}

/// A cluster as returned by `GET /clusters/open`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: i64,
    pub quadra: String,
    /// Assembly status ("assembling" / "ready"), if the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fill-ratio score the service may attach to open clusters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default)]
    pub members: Vec<ClusterMember>,
}

/// Body of `POST /clusters/join`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinClusterRequest {
    pub cluster_id: i64,
    pub user_id: i64,
}

/// Body of `POST /clusters/find_or_create`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindOrCreateRequest {
    pub user_id: i64,
    pub quadra: Quadra,
}

/// Response of `POST /clusters/find_or_create`
///
/// The service reports an assembled cluster flattened at the top level
/// (`cluster_id` + `members`), or the TIMs still missing for the quadra.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindOrCreateResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ClusterMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<SocType>>,
}

/// Profile fields accepted on registration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Body of `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub socionics_type: SocType,
    pub profile: ProfilePayload,
}

/// Response of `POST /users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    /// Some service builds report this as `user_id`
    #[serde(alias = "user_id")]
    pub id: i64,
    pub socionics_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quadra: Option<Quadra>,
}

/// Response of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
