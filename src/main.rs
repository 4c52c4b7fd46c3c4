mod config;
mod routes;
mod state;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::HostConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, timeout_secs = config.timeout.as_secs(), "flight API configured");

    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let state = state::AppState::new(config)?;
    let app = routes::app(state, leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "flightdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
