//! Application startup and lifecycle management.

use crate::config::InferenceConfig;
use crate::handlers;
use crate::models::AdvisoryTable;
use crate::services::{Classifier, ImagePreprocessor, MockClassifier, VitClassifier};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. Everything here is read-only after startup, so
/// request handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: InferenceConfig,
    pub classifier: Arc<dyn Classifier>,
    pub advisories: Arc<AdvisoryTable>,
    pub preprocessor: Arc<ImagePreprocessor>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: InferenceConfig) -> Result<Self, AppError> {
        let classifier: Arc<dyn Classifier> =
            match VitClassifier::load(Path::new(&config.model.path), config.model.device) {
                Ok(vit) => {
                    tracing::info!(path = %config.model.path, "Model loaded");
                    Arc::new(vit)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Using mock predictions");
                    Arc::new(MockClassifier::new(config.model.device))
                }
            };

        let state = AppState {
            config: config.clone(),
            classifier,
            advisories: Arc::new(AdvisoryTable::new()),
            preprocessor: Arc::new(ImagePreprocessor::new()),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/predict", post(handlers::predict))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
