use anyhow::{Context, Result};
use tracing::info;

use speech_translator::{config::Config, routes, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Load configuration from environment
    let config = Config::from_env()?;

    // Initialize logging
    let level = if config.debug { "debug" } else { "info" };
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(format!("speech_translator={}", level).parse()?);
    if config.debug {
        filter = filter.add_directive("tower_http=debug".parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Using translation service at {} (debug: {})",
        config.translate_api_url, config.debug
    );

    let app = routes::create_router(AppState::new(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
