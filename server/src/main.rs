//! # server
//!
//! Serves the EventDesk console: server-rendered Leptos shell plus the WASM
//! bundle under `/pkg`. The REST backend is a separate service reached at
//! `EVENTDESK_API_BASE_URL`.

#![recursion_limit = "256"]

mod routes;

use std::net::SocketAddr;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;

    // PORT (container deployments) overrides the configured site address.
    let addr = match std::env::var("PORT") {
        Ok(raw) => {
            let port: u16 = raw.parse().map_err(|_| ServerError::InvalidPort(raw))?;
            SocketAddr::from(([0, 0, 0, 0], port))
        }
        Err(_) => conf.leptos_options.site_addr,
    };
    let app = routes::app(conf.leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "eventdesk console listening");
    axum::serve(listener, app).await?;
    Ok(())
}
