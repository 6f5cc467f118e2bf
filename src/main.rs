use anyhow::Result;
use brain_engine::{web, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brain_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🧠 Starting brain engine");

    // Load configuration
    let config = Config::from_env()?;

    // Create application state
    let app_state = AppState::new(config);

    // Start web server
    web::start_server(app_state).await?;

    Ok(())
}
