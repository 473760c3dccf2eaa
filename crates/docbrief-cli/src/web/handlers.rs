use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use docbrief_core::model::{Outcome, SummaryText, UploadedDocument, DOCX_MIME};
use docbrief_core::report::OutputDocument;
use docbrief_core::summarize::Summarizer;
use docbrief_core::summarize_upload;

use super::error::WebError;
use super::pages;
use super::AppState;

const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"company_summary.docx\"";

/// `GET /`: the upload form.
pub async fn index() -> Html<String> {
    Html(pages::upload_page(None))
}

/// `POST /summarize`: run the whole pipeline on one uploaded file.
pub async fn summarize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, WebError> {
    let upload = read_upload(&mut multipart).await?;

    let outcome = tokio::task::spawn_blocking(move || {
        let summarizer = Summarizer::new(&state.profile, state.transport.as_ref());
        summarize_upload(&upload, state.pdf_extractor.as_ref(), &summarizer)
    })
    .await
    .map_err(|e| WebError::Internal(e.to_string()))??;

    let page = match outcome {
        Outcome::Summarized { summary } => pages::summary_page(summary.as_str()),
        Outcome::Unsupported { .. } => pages::upload_page(Some(pages::UNSUPPORTED_MESSAGE)),
        Outcome::NoText => pages::upload_page(Some(pages::NO_TEXT_MESSAGE)),
    };
    Ok(Html(page))
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub summary: String,
}

/// `POST /download`: build the Word document and stream it back.
///
/// The document lives in a temporary file only for the duration of the request.
pub async fn download(Form(form): Form<DownloadForm>) -> Result<Response, WebError> {
    // Browsers submit textarea line breaks as CRLF.
    let summary = SummaryText(form.summary.replace("\r\n", "\n"));

    let bytes = tokio::task::spawn_blocking(move || {
        let mut document = OutputDocument::build(&summary)?;
        document.bytes()
    })
    .await
    .map_err(|e| WebError::Internal(e.to_string()))??;

    tracing::info!(bytes = bytes.len(), "serving summary document");
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME),
            (header::CONTENT_DISPOSITION, DOWNLOAD_DISPOSITION),
        ],
        bytes,
    )
        .into_response())
}

async fn read_upload(multipart: &mut Multipart) -> Result<UploadedDocument, WebError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::BadRequest(format!("malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        let declared = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| WebError::BadRequest(format!("failed to read file data: {e}")))?;

        if file_name.is_empty() && bytes.is_empty() {
            break;
        }

        let mime_type = match declared {
            Some(m) if m != "application/octet-stream" => m,
            _ => mime_guess::from_path(&file_name)
                .first_raw()
                .unwrap_or("application/octet-stream")
                .to_string(),
        };

        tracing::info!(file_name = %file_name, mime_type = %mime_type, bytes = bytes.len(), "upload received");
        return Ok(UploadedDocument::new(bytes.to_vec(), mime_type).with_file_name(file_name));
    }

    Err(WebError::BadRequest(pages::MISSING_FILE_MESSAGE.into()))
}
