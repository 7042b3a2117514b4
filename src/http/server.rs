//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, metrics)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::time::{Duration, Instant};

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    extract::MatchedPath,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    BoxError, Router,
};
use tokio::net::TcpListener;
use tower::{timeout::error::Elapsed, ServiceBuilder};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::ApiError;
use crate::lifecycle::ShutdownSignal;
use crate::observability::metrics;
use crate::observability::tracing::make_request_span;
use crate::upstream::{FlightFetcher, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: FlightFetcher,
}

/// HTTP server for the flight statistics API.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> UpstreamResult<Self> {
        let fetcher = FlightFetcher::new(&config.upstream)?;
        let state = AppState { fetcher };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::list_flights))
            .route("/flights/count", get(handlers::count_all))
            .route("/flights/inbound/count", get(handlers::count_inbound))
            .route("/flights/outbound/count", get(handlers::count_outbound))
            .route("/flights/count/{country}", get(handlers::count_by_country))
            .route(
                "/flights/outbound/count/{country}",
                get(handlers::count_outbound_by_country),
            )
            .route(
                "/flights/inbound/count/{country}",
                get(handlers::count_inbound_by_country),
            )
            .route("/flights/delayed/count", get(handlers::count_delayed))
            .route("/flights/most-popular", get(handlers::most_popular))
            .route("/flights/quick-getaway", get(handlers::quick_getaway))
            .route("/health", get(handlers::health))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_middleware_error))
                    .timeout(Duration::from_secs(config.timeouts.request_secs)),
            )
            .layer(middleware::from_fn(track_metrics))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                    .layer(propagate_request_id_layer()),
            )
    }

    /// The router, for driving the service without a listener.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` resolves.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Turn a failed middleware layer into the same 500 an upstream failure gives.
async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::TimedOut
    } else {
        ApiError::Middleware(err.to_string())
    }
}

/// Record request count and latency per matched route.
async fn track_metrics(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let request_id = request.request_id().unwrap_or("unknown").to_string();

    let response = next.run(request).await;
    let status = response.status().as_u16();

    tracing::debug!(
        request_id = %request_id,
        endpoint = %endpoint,
        status,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Request completed"
    );
    metrics::record_request(&endpoint, status, start);
    response
}
