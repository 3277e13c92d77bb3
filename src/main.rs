//! Literacy Classifier API Server
//!
//! Serves a pre-trained binary literacy classifier over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 LITERACY CLASSIFIER API                  │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌──────────────┐   ┌─────────────────┐  │
//! │  │  API      │   │  Feature     │   │  Classifier     │  │
//! │  │  Gateway  │──▶│  Encoder     │──▶│  (ONNX model +  │  │
//! │  │  (Axum)   │   │  (one-hot)   │   │   threshold)    │  │
//! │  └───────────┘   └──────────────┘   └─────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The model is loaded once at startup and immutable afterwards; requests
//! share it read-only.

mod config;
mod encoder;
mod error;
mod handlers;
mod model;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};
use model::{Classifier, OnnxScorer};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "literacy_server=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Literacy Classifier API starting...");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Model artifact: {}", config.model_path);

    // Load the model before binding the listener; the service must not
    // accept traffic without it
    let scorer = OnnxScorer::load(&config.model_path)
        .expect("Failed to load the model");

    // Build application state
    let state = AppState {
        classifier: Arc::new(Classifier::new(Arc::new(scorer))),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
