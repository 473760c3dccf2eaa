//! Browser UI: upload a document, read the summary, download it as Word.
//!
//! Routes:
//! - `GET /`           upload form
//! - `POST /summarize` multipart upload, returns the summary page
//! - `POST /download`  summary text in, `.docx` out
//! - `GET /health`     liveness check

pub mod error;
pub mod handlers;
pub mod pages;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use docbrief_core::config::Settings;
use docbrief_core::error::DocbriefError;
use docbrief_core::extraction::PdfExtractor;
use docbrief_core::profile::schema::SummaryProfile;
use docbrief_core::summarize::openai::OpenAiTransport;
use docbrief_core::summarize::ChatTransport;

/// Everything a request needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<SummaryProfile>,
    pub transport: Arc<dyn ChatTransport>,
    pub pdf_extractor: Arc<dyn PdfExtractor>,
}

impl AppState {
    pub fn from_settings(
        settings: &Settings,
        profile: SummaryProfile,
    ) -> Result<AppState, DocbriefError> {
        Ok(AppState {
            profile: Arc::new(profile),
            transport: Arc::new(OpenAiTransport::new(settings)?),
            pdf_extractor: Arc::from(settings.pdf_backend.extractor()),
        })
    }
}

/// Build the UI router.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/summarize", post(handlers::summarize))
        .route("/download", post(handlers::download))
        .route("/health", get(|| async { "ok" }))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the UI until Ctrl-C.
pub async fn serve(state: AppState, settings: &Settings) -> Result<(), DocbriefError> {
    let listener = tokio::net::TcpListener::bind(&settings.bind).await?;
    let addr = listener.local_addr()?;
    tracing::info!(addr = %addr, backend = %settings.pdf_backend, "docbrief UI listening on http://{addr}/");

    axum::serve(listener, router(state, settings.max_upload_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
