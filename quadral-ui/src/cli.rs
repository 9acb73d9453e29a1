//! Command-line surface of the client module

use clap::{Parser, Subcommand};

use quadral_common::socionics::SocType;

/// Quadral matchmaking client
#[derive(Debug, Parser)]
#[command(name = "quadral-ui", version, about = "Quadral matchmaking client")]
pub struct Cli {
    /// Matchmaking service base URL (overrides QUADRAL_API_URL and config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding the cached identity (overrides QUADRAL_DATA_DIR and config)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a profile and cache the resulting identity
    Register {
        /// Socionics type code (one of the 16 TIMs, e.g. ILE)
        #[arg(long)]
        tim: SocType,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },

    /// List open clusters of your quadra with a free slot for your TIM
    Clusters {
        /// Maximum number of clusters to request
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Attempt to claim your TIM's slot in a cluster
    Join {
        /// Cluster to join (from `clusters` output)
        cluster_id: i64,
    },

    /// Ask the service to complete or assemble a cluster for your quadra
    Build,

    /// Show the cached identity
    Whoami,

    /// Check whether the matchmaking service is reachable
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_register_with_tim() {
        let cli = Cli::parse_from(["quadral-ui", "register", "--tim", "ILE"]);
        match cli.command {
            Command::Register { tim, .. } => assert_eq!(tim, SocType::ILE),
            other => panic!("expected register, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_tim() {
        let result = Cli::try_parse_from(["quadral-ui", "register", "--tim", "ABC"]);
        assert!(result.is_err());
    }

    #[test]
    fn clusters_limit_defaults_to_ten() {
        let cli = Cli::parse_from(["quadral-ui", "clusters"]);
        match cli.command {
            Command::Clusters { limit } => assert_eq!(limit, 10),
            other => panic!("expected clusters, got {other:?}"),
        }
    }

    #[test]
    fn global_api_url_flag_applies_after_subcommand() {
        let cli = Cli::parse_from(["quadral-ui", "status", "--api-url", "http://localhost:9"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9"));
    }
}
