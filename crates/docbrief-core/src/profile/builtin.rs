use crate::error::DocbriefError;
use crate::profile::schema::SummaryProfile;
use crate::profile::validate_profile;

const COMPANY_SUMMARY_JSON: &str = include_str!("../../../../prompts/company-summary.json");

/// Available predefined profiles.
pub const PRESETS: &[&str] = &["company"];

pub const DEFAULT_PRESET: &str = "company";

/// Load a predefined profile by name.
pub fn load_preset(name: &str) -> Result<SummaryProfile, DocbriefError> {
    match name {
        "company" => {
            let profile: SummaryProfile = serde_json::from_str(COMPANY_SUMMARY_JSON)?;
            validate_profile(&profile)?;
            Ok(profile)
        }
        _ => Err(DocbriefError::ProfileInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The profile used when none is configured.
pub fn default_profile() -> Result<SummaryProfile, DocbriefError> {
    load_preset(DEFAULT_PRESET)
}
