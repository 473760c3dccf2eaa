pub mod builtin;
pub mod schema;

use crate::error::DocbriefError;
use schema::{OversizePolicy, SummaryProfile};
use std::path::Path;

/// Load a profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<SummaryProfile, DocbriefError> {
    let content = std::fs::read_to_string(path).map_err(|e| DocbriefError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<SummaryProfile, DocbriefError> {
    let profile: SummaryProfile =
        serde_json::from_str(json).map_err(|e| DocbriefError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<SummaryProfile, DocbriefError> {
    let profile: SummaryProfile = serde_json::from_str(json).map_err(DocbriefError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is well-formed.
pub fn validate_profile(profile: &SummaryProfile) -> Result<(), DocbriefError> {
    if profile.name.trim().is_empty() {
        return Err(DocbriefError::ProfileInvalid("name must not be empty".into()));
    }

    if profile.model.trim().is_empty() {
        return Err(DocbriefError::ProfileInvalid(
            "model must not be empty".into(),
        ));
    }

    if profile.system_prompt.trim().is_empty() || profile.user_prompt.trim().is_empty() {
        return Err(DocbriefError::ProfileInvalid(
            "system_prompt and user_prompt must not be empty".into(),
        ));
    }

    if !(0.0..=2.0).contains(&profile.temperature) {
        return Err(DocbriefError::ProfileInvalid(format!(
            "temperature {} is outside 0.0..=2.0",
            profile.temperature
        )));
    }

    if profile.max_tokens == 0 {
        return Err(DocbriefError::ProfileInvalid(
            "max_tokens must be greater than zero".into(),
        ));
    }

    match profile.oversize {
        OversizePolicy::Reject { max_chars: 0 } | OversizePolicy::Truncate { max_chars: 0 } => {
            return Err(DocbriefError::ProfileInvalid(
                "oversize.max_chars must be greater than zero".into(),
            ));
        }
        _ => {}
    }

    Ok(())
}
