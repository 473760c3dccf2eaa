use std::fmt;
use std::time::Duration;

use crate::error::DocbriefError;
use crate::extraction::PdfBackend;

pub const APP_NAME: &str = "docbrief";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_API_BASE: &str = "DOCBRIEF_API_BASE";
pub const ENV_PDF_BACKEND: &str = "DOCBRIEF_PDF_BACKEND";
pub const ENV_HTTP_TIMEOUT: &str = "DOCBRIEF_HTTP_TIMEOUT_SECS";
pub const ENV_BIND: &str = "DOCBRIEF_BIND";
pub const ENV_MAX_UPLOAD_MB: &str = "DOCBRIEF_MAX_UPLOAD_MB";

/// Filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "docbrief=info,docbrief_core=info,tower_http=info"
}

/// API secret. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(secret: impl Into<String>) -> Self {
        ApiCredential(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}

/// Process-wide settings, read once at startup and passed explicitly.
///
/// The credential is not checked here: a missing key only shows up as
/// `DocbriefError::MissingCredential` on the first API call.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<ApiCredential>,
    pub api_base: String,
    pub pdf_backend: PdfBackend,
    /// Explicit request timeout. `None` keeps the HTTP client's default.
    pub http_timeout: Option<Duration>,
    pub bind: String,
    pub max_upload_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            pdf_backend: PdfBackend::default(),
            http_timeout: None,
            bind: DEFAULT_BIND.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Settings, DocbriefError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, DocbriefError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        settings.api_key = get(ENV_API_KEY).map(ApiCredential::new);

        if let Some(base) = get(ENV_API_BASE) {
            settings.api_base = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(backend) = get(ENV_PDF_BACKEND) {
            settings.pdf_backend = backend.parse()?;
        }

        if let Some(secs) = get(ENV_HTTP_TIMEOUT) {
            let secs: u64 = parse_number(ENV_HTTP_TIMEOUT, &secs)?;
            settings.http_timeout = Some(Duration::from_secs(secs));
        }

        if let Some(bind) = get(ENV_BIND) {
            settings.bind = bind.trim().to_string();
        }

        if let Some(mb) = get(ENV_MAX_UPLOAD_MB) {
            let mb: usize = parse_number(ENV_MAX_UPLOAD_MB, &mb)?;
            settings.max_upload_bytes = mb * 1024 * 1024;
        }

        Ok(settings)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, DocbriefError> {
    value
        .trim()
        .parse()
        .map_err(|_| DocbriefError::Config(format!("{key} must be a whole number, got '{value}'")))
}
