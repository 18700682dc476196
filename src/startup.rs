//! Application startup and lifecycle management.

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::DocumentStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Shared application state, injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: DocumentStore,
}

pub fn router(state: AppState) -> Router {
    // Every origin, method, and header is allowed, credentials included.
    // tower-http rejects wildcards combined with credentials, so the
    // allowances mirror the request instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::read_root))
        .route("/test", get(handlers::diagnostics))
        .route("/api/audit", post(handlers::create_audit))
        .route(
            "/api/articles",
            get(handlers::list_articles).post(handlers::create_article),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    ///
    /// A missing or unreachable database does not fail the build; the store
    /// comes up disabled and the server serves anyway.
    pub async fn build(config: ApiConfig) -> Result<Self, AppError> {
        let store = DocumentStore::connect(&config).await;

        let state = AppState {
            config: config.clone(),
            store,
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> &DocumentStore {
        &self.state.store
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let app = router(self.state);
        axum::serve(self.listener, app).await
    }
}
