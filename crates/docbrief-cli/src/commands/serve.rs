use docbrief_core::config::Settings;
use docbrief_core::error::DocbriefError;
use std::path::PathBuf;

use crate::web::{self, AppState};

pub fn run(bind: Option<String>, profile_file: Option<PathBuf>) -> Result<(), DocbriefError> {
    let mut settings = Settings::from_env()?;
    if let Some(bind) = bind {
        settings.bind = bind;
    }

    let profile = super::resolve_profile(profile_file)?;
    tracing::info!(
        profile = %profile.name,
        model = %profile.model,
        credential = settings.api_key.is_some(),
        "starting docbrief UI"
    );
    let state = AppState::from_settings(&settings, profile)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(state, &settings))
}
