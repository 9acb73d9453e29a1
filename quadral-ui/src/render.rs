//! Presentation adapter: matchmaking outcomes as terminal text
//!
//! Purely reactive — renders what the workflow classified, no business
//! rules of its own.

use quadral_common::api::{ClusterMember, ClusterSummary};

use crate::identity::Identity;
use crate::matchmaking::{
    JoinOutcome, ListOutcome, MatchOutcome, RegisterOutcome, StatusOutcome,
};

const NO_PROFILE_TEXT: &str = "No profile yet. Create one with `quadral-ui register --tim <TIM>`.";
const STALE_PROFILE_TEXT: &str =
    "Could not determine your quadra. Update your profile by registering again.";

pub fn cluster_list(outcome: &ListOutcome) -> String {
    match outcome {
        ListOutcome::NeedsProfile => NO_PROFILE_TEXT.to_string(),
        ListOutcome::NeedsProfileUpdate => STALE_PROFILE_TEXT.to_string(),
        ListOutcome::Empty => {
            "No joinable clusters yet. Try building one with `quadral-ui build`.".to_string()
        }
        ListOutcome::Listed(clusters) => clusters
            .iter()
            .map(cluster_card)
            .collect::<Vec<_>>()
            .join("\n"),
        ListOutcome::Failed(message) => format!("Could not load clusters: {message}"),
    }
}

/// One cluster as a text card
fn cluster_card(cluster: &ClusterSummary) -> String {
    let mut card = format!("Cluster #{} [{}]", cluster.cluster_id, cluster.quadra);
    if let Some(status) = &cluster.status {
        card.push_str(&format!(" ({status})"));
    }
    card.push('\n');
    if cluster.members.is_empty() {
        card.push_str("  (no members yet)\n");
    } else {
        for member in &cluster.members {
            card.push_str(&member_line(member));
        }
    }
    card.push_str(&format!(
        "  join with: quadral-ui join {}\n",
        cluster.cluster_id
    ));
    card
}

fn member_line(member: &ClusterMember) -> String {
    format!("  - user {} ({})\n", member.user_id, member.socionics_type)
}

pub fn join(outcome: &JoinOutcome) -> String {
    match outcome {
        JoinOutcome::NeedsProfile => NO_PROFILE_TEXT.to_string(),
        JoinOutcome::Joined(cluster_id) => format!("You joined cluster #{cluster_id}."),
        JoinOutcome::SlotTaken => {
            "The slot for your TIM is already taken. Pick another cluster.".to_string()
        }
        JoinOutcome::Failed(message) => format!("Could not join the cluster: {message}"),
    }
}

pub fn negotiation(outcome: &MatchOutcome) -> String {
    match outcome {
        MatchOutcome::NeedsProfile => NO_PROFILE_TEXT.to_string(),
        MatchOutcome::NeedsProfileUpdate => STALE_PROFILE_TEXT.to_string(),
        MatchOutcome::Completed {
            cluster_id,
            members,
        } => {
            let mut text = match cluster_id {
                Some(id) => format!("Cluster assembled! ID: {id}\n"),
                None => "Cluster assembled!\n".to_string(),
            };
            for member in members {
                text.push_str(&member_line(member));
            }
            text
        }
        MatchOutcome::Pending(missing) => {
            let tims: Vec<&str> = missing.iter().map(|tim| tim.as_str()).collect();
            format!("Still waiting for TIMs: {}", tims.join(", "))
        }
        MatchOutcome::Unassembled => {
            "The service cannot assemble a cluster yet. Try again later.".to_string()
        }
        MatchOutcome::Failed(message) => format!("Could not build a cluster: {message}"),
    }
}

pub fn registration(outcome: &RegisterOutcome) -> String {
    match outcome {
        RegisterOutcome::Registered(identity) => format!(
            "Profile created. ID: {}, TIM: {}, quadra: {}.",
            identity.user_id,
            identity.socionics_type,
            identity
                .quadra
                .map(|q| q.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ),
        RegisterOutcome::Failed(message) => format!("Could not create a profile: {message}"),
    }
}

pub fn cached_identity(identity: Option<&Identity>) -> String {
    match identity {
        None => NO_PROFILE_TEXT.to_string(),
        Some(identity) => {
            let quadra = identity
                .quadra
                .map(|q| q.to_string())
                .unwrap_or_else(|| "unresolved (update your profile)".to_string());
            format!(
                "Cached profile — ID: {}, TIM: {}, quadra: {}",
                identity.user_id, identity.socionics_type, quadra
            )
        }
    }
}

pub fn service_status(outcome: &StatusOutcome) -> String {
    match outcome {
        StatusOutcome::Available => "Matchmaking service is up.".to_string(),
        StatusOutcome::Unavailable(message) => {
            format!("Matchmaking service is unavailable: {message}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadral_common::socionics::{Quadra, SocType};

    #[test]
    fn listed_clusters_render_as_cards() {
        let outcome = ListOutcome::Listed(vec![ClusterSummary {
            cluster_id: 12,
            quadra: "beta".to_string(),
            status: Some("assembling".to_string()),
            score: None,
            members: vec![ClusterMember {
                user_id: 4,
                socionics_type: "SLE".to_string(),
            }],
        }]);
        let text = cluster_list(&outcome);
        assert!(text.contains("Cluster #12 [beta] (assembling)"));
        assert!(text.contains("user 4 (SLE)"));
        assert!(text.contains("join 12"));
    }

    #[test]
    fn empty_cluster_renders_placeholder_line() {
        let outcome = ListOutcome::Listed(vec![ClusterSummary {
            cluster_id: 1,
            quadra: "alpha".to_string(),
            status: None,
            score: None,
            members: vec![],
        }]);
        assert!(cluster_list(&outcome).contains("(no members yet)"));
    }

    #[test]
    fn pending_negotiation_lists_missing_tims() {
        let text = negotiation(&MatchOutcome::Pending(vec![SocType::SEI, SocType::ESE]));
        assert_eq!(text, "Still waiting for TIMs: SEI, ESE");
    }

    #[test]
    fn registration_renders_resolved_quadra() {
        let text = registration(&RegisterOutcome::Registered(Identity {
            user_id: 11,
            socionics_type: "ILE".to_string(),
            quadra: Some(Quadra::Alpha),
        }));
        assert_eq!(text, "Profile created. ID: 11, TIM: ILE, quadra: alpha.");
    }
}
