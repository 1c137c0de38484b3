mod about;
mod config;
mod error;
mod router;

use config::Config;
use error::*;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting server ...");
    tracing::debug!("serving static files from {}", config.public_dir.display());

    let app = router::router(&config.public_dir);

    let listener = tokio::net::TcpListener::bind(config.server_address)
        .await
        .map_err(ServerError::from)?;

    tracing::info!("listening on {}", config.server_address);

    axum::serve(listener, app).await.map_err(ServerError::from)?;

    Ok(())
}
