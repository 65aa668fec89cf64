//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{InMemorySessionStore, StaticCatalog},
    config::{Config, ConfigError},
    error::ApiError,
    web::{app, rest::ApiDoc, state::AppState},
};
use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderValue, Method,
};
use axum::Router;
use chrono::Utc;
use nordic_explorer_core::{CatalogProvider, SessionStore};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize Service Adapters ---
    let sessions = Arc::new(InMemorySessionStore::new(config.session_ttl));
    let catalog = Arc::new(StaticCatalog::new());
    info!(
        adventures = catalog.adventures().len(),
        accommodations = catalog.accommodations().len(),
        session_ttl_minutes = config.session_ttl.num_minutes(),
        "Catalog loaded"
    );

    // --- 3. Sweep Idle Sessions in the Background ---
    tokio::spawn(sweep_sessions(sessions.clone()));

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        sessions,
        catalog,
        config: config.clone(),
    });

    // --- 5. Create the Web Router ---
    let mut api_router = app(app_state);
    if let Some(origin) = &config.allowed_origin {
        let origin = origin.parse::<HeaderValue>().map_err(|e| {
            ConfigError::InvalidValue("ALLOWED_ORIGIN".to_string(), e.to_string())
        })?;
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, ACCEPT]);
        api_router = api_router.layer(cors);
    }

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Periodically drops sessions that have been idle past their lifetime.
async fn sweep_sessions(sessions: Arc<InMemorySessionStore>) {
    let mut interval = tokio::time::interval(SWEEP_INTERVAL);
    loop {
        interval.tick().await;
        match sessions.purge_expired(Utc::now()).await {
            Ok(0) => {}
            Ok(purged) => debug!(purged, "Swept idle sessions"),
            Err(e) => warn!("Session sweep failed: {:?}", e),
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {:?}", e);
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
