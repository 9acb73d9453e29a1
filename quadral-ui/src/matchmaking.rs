//! Matchmaking workflow
//!
//! Each user action maps to one operation here. An operation checks the
//! identity preconditions before touching the network, performs at most one
//! round-trip, and folds every result — including failures — into an outcome
//! the presentation layer can render. Outcomes are terminal: nothing is
//! retried, and the user can always trigger the same action again.

use quadral_common::api::{
    ClusterMember, ClusterSummary, CreateUserRequest, FindOrCreateRequest, FindOrCreateResponse,
    JoinClusterRequest, ProfilePayload,
};
use quadral_common::socionics::{resolve_quadra, SocType};

use crate::client::{ApiClient, ClientError, JoinReply};
use crate::identity::{Identity, IdentityStore};

/// Shown for network/parse failures instead of transport internals
const TRANSPORT_FAILURE_TEXT: &str = "Matchmaking service unreachable, try again later";

/// Outcome of listing open clusters
#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    /// No cached identity — register first
    NeedsProfile,
    /// Cached identity carries a TIM the taxonomy cannot resolve
    NeedsProfileUpdate,
    /// The service returned no joinable clusters
    Empty,
    Listed(Vec<ClusterSummary>),
    Failed(String),
}

/// Outcome of a join attempt
#[derive(Debug, Clone, PartialEq)]
pub enum JoinOutcome {
    NeedsProfile,
    Joined(i64),
    SlotTaken,
    Failed(String),
}

/// Outcome of the find-or-create negotiation
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    NeedsProfile,
    NeedsProfileUpdate,
    /// All four slots filled
    Completed {
        cluster_id: Option<i64>,
        members: Vec<ClusterMember>,
    },
    /// TIMs the quadra still waits for
    Pending(Vec<SocType>),
    /// The service reported neither a cluster nor a missing list
    Unassembled,
    Failed(String),
}

/// Outcome of registration
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Registered(Identity),
    Failed(String),
}

/// Outcome of the service health probe
#[derive(Debug, Clone, PartialEq)]
pub enum StatusOutcome {
    Available,
    Unavailable(String),
}

/// Profile fields collected for registration
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub email: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
}

/// List clusters of the caller's quadra that still have a slot for their TIM
pub async fn list_open_clusters(
    store: &IdentityStore,
    api: &ApiClient,
    limit: u32,
) -> ListOutcome {
    let Some(mut identity) = store.load() else {
        return ListOutcome::NeedsProfile;
    };
    let Some(quadra) = store.ensure_quadra(&mut identity) else {
        return ListOutcome::NeedsProfileUpdate;
    };

    match api
        .open_clusters(quadra, &identity.socionics_type, limit)
        .await
    {
        Ok(clusters) if clusters.is_empty() => ListOutcome::Empty,
        Ok(clusters) => ListOutcome::Listed(clusters),
        Err(error) => ListOutcome::Failed(failure_text(error)),
    }
}

/// Attempt to claim the caller's slot in one specific cluster
pub async fn join_cluster(store: &IdentityStore, api: &ApiClient, cluster_id: i64) -> JoinOutcome {
    let Some(identity) = store.load() else {
        return JoinOutcome::NeedsProfile;
    };

    let request = JoinClusterRequest {
        cluster_id,
        user_id: identity.user_id,
    };
    match api.join_cluster(&request).await {
        Ok(JoinReply::Accepted) => JoinOutcome::Joined(cluster_id),
        Ok(JoinReply::SlotTaken) => JoinOutcome::SlotTaken,
        Err(error) => JoinOutcome::Failed(failure_text(error)),
    }
}

/// Drive the find-or-create negotiation for the caller's quadra
pub async fn find_or_create_cluster(store: &IdentityStore, api: &ApiClient) -> MatchOutcome {
    let Some(mut identity) = store.load() else {
        return MatchOutcome::NeedsProfile;
    };
    let Some(quadra) = store.ensure_quadra(&mut identity) else {
        return MatchOutcome::NeedsProfileUpdate;
    };

    let request = FindOrCreateRequest {
        user_id: identity.user_id,
        quadra,
    };
    match api.find_or_create(&request).await {
        Ok(response) => classify_match(response),
        Err(error) => MatchOutcome::Failed(failure_text(error)),
    }
}

/// Register a profile and cache the resulting identity
pub async fn register(
    store: &IdentityStore,
    api: &ApiClient,
    tim: SocType,
    profile: NewProfile,
) -> RegisterOutcome {
    let request = CreateUserRequest {
        email: profile.email,
        username: profile.username,
        socionics_type: tim,
        profile: ProfilePayload { bio: profile.bio },
    };

    let created = match api.create_user(&request).await {
        Ok(created) => created,
        Err(error) => return RegisterOutcome::Failed(failure_text(error)),
    };

    let identity = Identity {
        user_id: created.id,
        quadra: created
            .quadra
            .or_else(|| resolve_quadra(&created.socionics_type)),
        socionics_type: created.socionics_type,
    };
    if let Err(error) = store.save(&identity) {
        return RegisterOutcome::Failed(format!("Profile created but not cached: {error}"));
    }
    RegisterOutcome::Registered(identity)
}

/// Probe the matchmaking service
pub async fn service_status(api: &ApiClient) -> StatusOutcome {
    match api.health().await {
        Ok(health) if health.status == "ok" => StatusOutcome::Available,
        Ok(health) => StatusOutcome::Unavailable(format!(
            "service reported status \"{}\"",
            health.status
        )),
        Err(error) => StatusOutcome::Unavailable(failure_text(error)),
    }
}

/// Classify a find-or-create response body.
///
/// An assembled cluster arrives flattened at the top level; a success with
/// neither members nor a missing list renders as "not assembled yet" rather
/// than an error.
fn classify_match(response: FindOrCreateResponse) -> MatchOutcome {
    if response.ok {
        if let Some(members) = response.members {
            return MatchOutcome::Completed {
                cluster_id: response.cluster_id,
                members,
            };
        }
        return MatchOutcome::Unassembled;
    }

    match response.missing {
        Some(missing) if !missing.is_empty() => MatchOutcome::Pending(missing),
        _ => MatchOutcome::Unassembled,
    }
}

/// Service errors surface verbatim; transport failures get a generic text
/// and keep their detail in the log.
fn failure_text(error: ClientError) -> String {
    match error {
        ClientError::Api { message, .. } => message,
        ClientError::Network(detail) | ClientError::Parse(detail) => {
            tracing::warn!(%detail, "Transport failure");
            TRANSPORT_FAILURE_TEXT.to_string()
        }
    }
}
