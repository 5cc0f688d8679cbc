mod api;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::state::AppState;
use infrastructure::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scheduling_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scheduling Service...");

    // Load the process-wide configuration: agent roster, shift durations,
    // holidays. Immutable for the lifetime of the process.
    let settings = Arc::new(Settings::new()?);
    tracing::info!(agents = settings.roster.agents.len(), "Configuration loaded");

    let address = settings.server_address();
    let state = AppState::new(settings);

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Scheduling Service listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
