//! Frontend server entrypoint.
//!
//! Serves the static demo page, a `/health` route for the container runtime,
//! and a `/config` route exposing the backend URL to the page. On startup it
//! optionally fires a one-shot reachability check against the backend, the
//! way the original page probed its backend on load.

use std::path::Path;

use tokio::net::TcpListener;

use api_console::config::{loader, ConsoleConfig};
use api_console::http::HttpServer;
use api_console::lifecycle::{wait_for_signal, Shutdown};
use api_console::observability::logging;
use api_console::probe::{Endpoint, EndpointClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "api-console starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend_url = %config.backend.base_url,
        static_dir = %config.listener.static_dir,
        "configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    if config.backend.startup_check {
        let client = EndpointClient::new(&config.backend)?;
        tokio::spawn(startup_check(client));
    }

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Config file path comes from `API_CONSOLE_CONFIG`; without it, defaults
/// plus environment overrides apply.
fn load_config() -> Result<ConsoleConfig, loader::ConfigError> {
    match std::env::var("API_CONSOLE_CONFIG") {
        Ok(path) => loader::load_config(Path::new(&path)),
        Err(_) => loader::load_default_config(),
    }
}

/// One-shot backend reachability check, then a health probe if reachable.
///
/// Purely informational; the server comes up either way.
async fn startup_check(client: EndpointClient) {
    match client.connectivity_check().await {
        Ok(()) => {
            tracing::info!(backend_url = %client.base_url(), "backend reachable");
            match client.call(Endpoint::Health).await {
                Ok(body) => tracing::info!(body = %body, "backend health check passed"),
                Err(error) => {
                    tracing::warn!(error = %error, "backend reachable but health check failed")
                }
            }
        }
        Err(error) => tracing::warn!(error = %error, "backend connectivity check failed"),
    }
}
