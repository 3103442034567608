//! Fabrica Routing Export Service
//!
//! Accepts a planning workbook upload (approved-item request sheet plus
//! BOM process matrix) and returns the derived routing table as a
//! downloadable workbook.

use anyhow::Result;
use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, Method},
    routing::get,
    serve, Router,
};
use fabrica_utils::{init_logging, AppConfig};
use prometheus::{IntCounter, Registry, TextEncoder};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod handlers;
mod middleware;
mod routes;
mod spool;

use middleware::request_id_middleware;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Fabrica Routing Export Service");

    let app = create_app(&config)?;

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("Routing Export Service listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}

pub fn create_app(config: &AppConfig) -> Result<Router> {
    let metrics = ExportMetrics::new(&config.monitoring.prometheus_namespace)?;

    let mut app = Router::new().route("/health", get(handlers::health_check));

    if config.monitoring.metrics_enabled {
        app = app.route("/metrics", get(metrics_handler));
    }

    let app = app
        // API routes
        .nest("/api/v1", routes::create_api_routes())
        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        // Application state
        .with_state(AppState {
            config: config.clone(),
            metrics,
        });

    Ok(app)
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub metrics: ExportMetrics,
}

/// Export counters, gathered by `/metrics`. The registry is app-local,
/// not the process-wide default.
#[derive(Clone)]
pub struct ExportMetrics {
    registry: Registry,
    pub workbooks_total: IntCounter,
    pub entries_total: IntCounter,
}

impl ExportMetrics {
    fn new(namespace: &str) -> Result<Self> {
        let workbooks_total = IntCounter::new(
            format!("{namespace}_workbooks_processed_total"),
            "Workbooks accepted by the export endpoint",
        )?;
        let entries_total = IntCounter::new(
            format!("{namespace}_routing_entries_total"),
            "Routing entries emitted across all exports",
        )?;

        let registry = Registry::new();
        registry.register(Box::new(workbooks_total.clone()))?;
        registry.register(Box::new(entries_total.clone()))?;

        Ok(Self {
            registry,
            workbooks_total,
            entries_total,
        })
    }
}

async fn metrics_handler(State(state): State<AppState>) -> String {
    let encoder = TextEncoder::new();
    encoder
        .encode_to_string(&state.metrics.registry.gather())
        .unwrap_or_else(|_| "Error encoding metrics".to_string())
}
