//! quadral-ui - Quadral matchmaking client
//!
//! Registers a psychological-type profile against the matchmaking service
//! and drives the cluster workflow: list joinable clusters for the user's
//! quadra, claim a slot, or negotiate find-or-create. Rendered output goes
//! to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use quadral_common::config;
use quadral_ui::cli::{Cli, Command};
use quadral_ui::client::ApiClient;
use quadral_ui::identity::IdentityStore;
use quadral_ui::matchmaking::{self, JoinOutcome, NewProfile};
use quadral_ui::render;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber; stderr keeps stdout clean for output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Quadral client (quadral-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();

    let base_url = config::resolve_api_base_url(cli.api_url.as_deref(), config::API_URL_ENV);
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref(), config::DATA_DIR_ENV);
    info!("Service URL: {base_url}");
    info!("Data directory: {}", data_dir.display());

    let store = IdentityStore::new(&data_dir);
    let api = ApiClient::new(&base_url)?;

    match cli.command {
        Command::Register {
            tim,
            email,
            username,
            bio,
        } => {
            let profile = NewProfile {
                email,
                username,
                bio,
            };
            let outcome = matchmaking::register(&store, &api, tim, profile).await;
            println!("{}", render::registration(&outcome));
        }
        Command::Clusters { limit } => {
            let outcome = matchmaking::list_open_clusters(&store, &api, limit).await;
            println!("{}", render::cluster_list(&outcome));
        }
        Command::Join { cluster_id } => {
            let outcome = matchmaking::join_cluster(&store, &api, cluster_id).await;
            println!("{}", render::join(&outcome));

            // Refresh the list after a successful join so the now-occupied
            // slot is visible
            if matches!(outcome, JoinOutcome::Joined(_)) {
                let refreshed = matchmaking::list_open_clusters(&store, &api, 10).await;
                println!("{}", render::cluster_list(&refreshed));
            }
        }
        Command::Build => {
            let outcome = matchmaking::find_or_create_cluster(&store, &api).await;
            println!("{}", render::negotiation(&outcome));
        }
        Command::Whoami => {
            let identity = store.load().map(|mut identity| {
                store.ensure_quadra(&mut identity);
                identity
            });
            println!("{}", render::cached_identity(identity.as_ref()));
        }
        Command::Status => {
            let outcome = matchmaking::service_status(&api).await;
            println!("{}", render::service_status(&outcome));
        }
    }

    Ok(())
}
