mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = HostConfig::from_env()?;
    let leptos_conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let app = routes::app(leptos_conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "gatehouse listening");
    axum::serve(listener, app).await?;
    Ok(())
}
