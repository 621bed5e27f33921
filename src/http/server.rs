//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve static files with index fallback
//! - Run with graceful shutdown

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::Request,
    http::uri::{PathAndQuery, Uri},
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ConsoleConfig;
use crate::http::handlers;
use crate::http::request::MakeConsoleRequestId;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend_url: Arc<str>,
}

/// Static-file server with health and config routes.
pub struct HttpServer {
    router: Router,
    config: ConsoleConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ConsoleConfig) -> Self {
        let state = AppState {
            backend_url: config.backend.base_url.clone().into(),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ConsoleConfig, state: AppState) -> Router {
        let static_dir = Path::new(&config.listener.static_dir);
        let index = static_dir.join("index.html");

        // Unknown paths fall back to the index document (SPA behavior).
        let static_files = ServeDir::new(static_dir).fallback(ServeFile::new(index));

        let mut router = Router::new()
            .route("/health", get(handlers::health))
            .route("/config", get(handlers::frontend_config))
            .fallback_service(static_files)
            .with_state(state)
            .layer(middleware::map_request(normalize_route_case))
            .layer(SetRequestIdLayer::x_request_id(MakeConsoleRequestId))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http());

        if config.listener.request_timeout_secs > 0 {
            router = router.layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )));
        }

        router
    }

    /// The router, for in-process testing without binding a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_dir = %self.config.listener.static_dir,
            "frontend server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("frontend server draining");
            })
            .await?;

        tracing::info!("frontend server stopped");
        Ok(())
    }
}

/// Match defined routes case-insensitively, as the original server did.
///
/// Only the two defined routes are rewritten; asset paths keep their casing
/// since the filesystem may be case-sensitive.
async fn normalize_route_case(mut request: Request<Body>) -> Request<Body> {
    let path = request.uri().path();
    let lowered = path.to_ascii_lowercase();
    if lowered == path || !matches!(lowered.as_str(), "/health" | "/config") {
        return request;
    }

    let path_and_query = match request.uri().query() {
        Some(query) => format!("{}?{}", lowered, query),
        None => lowered,
    };
    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = path_and_query.parse::<PathAndQuery>().ok();
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}
