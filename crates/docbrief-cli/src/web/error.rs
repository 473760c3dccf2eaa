use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use docbrief_core::error::DocbriefError;

use super::pages;

/// Request-level failures, rendered as HTML pages.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Pipeline(#[from] DocbriefError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                Html(pages::upload_page(Some(detail))),
            )
                .into_response(),
            WebError::Pipeline(e) => {
                tracing::error!(error = %e, "pipeline failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages::fault_page(&e.to_string())),
                )
                    .into_response()
            }
            WebError::Internal(detail) => {
                tracing::error!(detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(pages::fault_page("An internal error occurred")),
                )
                    .into_response()
            }
        }
    }
}
