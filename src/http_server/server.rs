//! HTTP server lifecycle.
//!
//! Builds the combined router (student routes, health, CORS, request
//! tracing), binds the listener, and serves with a bounded
//! graceful-shutdown window: a SIGINT/SIGTERM stops the listener and
//! in-flight requests get a few seconds to drain before a forced exit.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use serde_json::json;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, ConfigError};
use crate::storage::{SqliteStorage, StorageError, StudentStorage};

use super::config::HttpServerConfig;
use super::response::STATUS_OK;
use super::student_routes::{student_routes, StudentState};

/// How long in-flight requests may drain after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Errors that take the server down.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the students API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given storage backend.
    pub fn new(config: HttpServerConfig, storage: Arc<dyn StudentStorage>) -> Self {
        let router = Self::build_router(&config, storage);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, storage: Arc<dyn StudentStorage>) -> Router {
        let state = Arc::new(StudentState::new(storage));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(student_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!(address = %addr, "server started");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server shutdown complete");
        Ok(())
    }
}

/// Health check routes
fn health_routes() -> Router {
    Router::new().route("/health", get(|| async { Json(json!({"status": STATUS_OK})) }))
}

/// Resolves when SIGINT or SIGTERM arrives, arming the grace-period timer.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("SIGINT received, shutting down gracefully...");
        }
        _ = terminate => {
            info!("SIGTERM received, shutting down gracefully...");
        }
    }

    // Listener closes as soon as this future resolves; the timer bounds
    // how long the drain may take.
    tokio::spawn(async {
        tokio::time::sleep(SHUTDOWN_GRACE).await;
        error!("graceful shutdown window expired, exiting");
        std::process::exit(1);
    });
}

/// Load configuration, open storage, and serve until shutdown.
pub async fn run() -> Result<(), ServerError> {
    init_tracing();

    let config = AppConfig::load()?;
    let storage = SqliteStorage::open(&config.storage_path.to_string_lossy()).await?;
    info!(
        storage_path = %config.storage_path.display(),
        env = %config.env,
        "storage initialized"
    );

    HttpServer::new(config.http_server, Arc::new(storage))
        .start()
        .await
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_router_builds() {
        let storage = Arc::new(SqliteStorage::open(":memory:").await.unwrap());
        let server = HttpServer::new(HttpServerConfig::default(), storage);
        assert_eq!(server.socket_addr(), "127.0.0.1:8082");
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_router_builds_with_origin_list() {
        let storage = Arc::new(SqliteStorage::open(":memory:").await.unwrap());
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, storage).router();
    }
}
