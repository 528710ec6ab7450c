//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all employee handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind the server to a listener and run until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::gateway::{EmployeeGateway, GatewayError};
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<EmployeeGateway>,
}

/// HTTP server for the employee facade.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, GatewayError> {
        let gateway = Arc::new(EmployeeGateway::new(&config.upstream, &config.retries)?);
        let state = AppState { gateway };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api/v1/employees",
                get(handlers::list_employees).post(handlers::create_employee),
            )
            .route(
                "/api/v1/employees/search/{query}",
                get(handlers::search_employees),
            )
            .route(
                "/api/v1/employees/highest-salary",
                get(handlers::highest_salary),
            )
            .route(
                "/api/v1/employees/top-ten-earners",
                get(handlers::top_ten_earners),
            )
            .route(
                "/api/v1/employees/{id}",
                get(handlers::get_employee).delete(handlers::delete_employee),
            )
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
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
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
