use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use droidforge_github::{CiBackend, GitHubClient};

pub mod api;
pub mod config;
pub mod service;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "droidforge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting droidforge build relay...");

    let config = config::Config::from_env();
    config.validate().expect("Invalid configuration");

    tracing::info!(
        "Relaying builds to {}/{} via {} on {}",
        config.repo_owner,
        config.repo_name,
        config.workflow_file,
        config.branch
    );

    let backend: Arc<dyn CiBackend> = Arc::new(GitHubClient::new(
        &config.repo_owner,
        &config.repo_name,
        config.github_token.clone().unwrap_or_default(),
    ));

    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(api::AppState { backend, config });

    // Build router with all API endpoints
    let app = api::create_router(state);

    tracing::info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
