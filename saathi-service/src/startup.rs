//! Application startup and lifecycle management.

use crate::config::SaathiConfig;
use crate::handlers;
use crate::ingest::{ExtractorRegistry, IngestPipeline};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::{Assistant, MatterRegistry};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: SaathiConfig,
    pub assistant: Assistant,
    pub ingest: IngestPipeline,
    pub matters: MatterRegistry,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the Gemini provider.
    pub async fn build(config: SaathiConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            api_base: config.gemini.api_base.clone(),
            timeout: Duration::from_secs(config.gemini.timeout_secs),
        };
        let provider = GeminiTextProvider::new(gemini_config)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("{}", e)))?;

        if config.gemini.api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; AI endpoints will fail until it is");
        }
        tracing::info!(model = %config.gemini.model, "Initialized Gemini text provider");

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an arbitrary provider (tests use the mock).
    pub async fn build_with_provider(
        config: SaathiConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let matters = match &config.matters_file {
            Some(path) => {
                let registry = MatterRegistry::from_file(path).await?;
                tracing::info!(path = %path, count = registry.list().len(), "Loaded matters");
                registry
            }
            None => MatterRegistry::default(),
        };

        let assistant = Assistant::new(provider);
        let ingest = IngestPipeline::new(
            assistant.clone(),
            ExtractorRegistry::new(),
            config.limits.clone(),
        );

        let state = AppState {
            config: config.clone(),
            assistant,
            ingest,
            matters,
        };
        let router = router(state);

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind TCP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Saathi service listener bound");

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            service = "saathi-service",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}

pub fn router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_request_bytes;

    let api = Router::new()
        .route("/chat", post(handlers::chat))
        .route("/summarize", post(handlers::summarize))
        .route("/parse-files", post(handlers::parse_files))
        .route("/parse-pdf", post(handlers::parse_pdf))
        .route("/upload", post(handlers::upload))
        .route("/transcribe-audio", post(handlers::transcribe_audio))
        .route("/matters", get(handlers::list_matters))
        .route("/matters/:id", get(handlers::get_matter))
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api", api)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<axum::body::Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            },
        ))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    HeaderName::from_static(REQUEST_ID_HEADER),
                ]),
        )
        .with_state(state)
}
