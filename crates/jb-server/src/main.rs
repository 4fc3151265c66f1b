//! JobBoard RS Server
//!
//! HTTP server exposing the read-only job query API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jb_api::AppState;
use jb_core::AppConfig;
use jb_db::{Store, StoreConfig};

mod health;

use health::HealthState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        AppConfig::default()
    });

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        "Starting JobBoard RS"
    );

    // Connect to the document store. The driver connects lazily, so a ping
    // tells us whether the store is actually there; the service still
    // starts when it is not, and requests report the store as unavailable.
    let store_config = StoreConfig {
        uri: config.store.uri.clone(),
        database: config.store.database.clone(),
        connect_timeout_secs: config.store.connect_timeout_secs,
        selection_timeout_secs: config.store.selection_timeout_secs,
    };
    let store = Store::connect(&store_config).await?;
    match store.ping().await {
        Ok(()) => info!("Connected to document store"),
        Err(e) => tracing::warn!("Document store not reachable at startup: {}", e),
    }

    let app_state = AppState::new(Arc::new(store.jobs()));
    let health_state = HealthState::new(Some(store));

    // Build router
    let app = build_router(app_state, health_state);

    // Start server
    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,jb_server=debug,jb_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Build the application router
fn build_router(state: AppState, health: HealthState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(health);

    Router::new()
        .merge(health_routes)
        .merge(jb_api::routes::router().with_state(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use jb_core::PageParams;
    use jb_db::{GroupCount, Job, JobFilter, JobId, JobStore, StoreResult};
    use tower::ServiceExt;

    struct EmptyStore;

    #[async_trait]
    impl JobStore for EmptyStore {
        async fn find(&self, _filter: &JobFilter, _page: PageParams) -> StoreResult<Vec<Job>> {
            Ok(vec![])
        }

        async fn count(&self, _filter: &JobFilter) -> StoreResult<u64> {
            Ok(0)
        }

        async fn find_by_id(&self, _id: &JobId) -> StoreResult<Option<Job>> {
            Ok(None)
        }

        async fn distinct_values(&self, _field: &str) -> StoreResult<Vec<String>> {
            Ok(vec![])
        }

        async fn group_count(&self, _field: &str) -> StoreResult<Vec<GroupCount>> {
            Ok(vec![])
        }
    }

    fn test_app() -> Router {
        let state = AppState::new(Arc::new(EmptyStore));
        build_router(state, HealthState::new(None))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_without_store() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_jobs_route_is_mounted() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/jobs").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
