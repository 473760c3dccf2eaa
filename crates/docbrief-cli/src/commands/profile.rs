use docbrief_core::error::DocbriefError;
use docbrief_core::profile::builtin;
use docbrief_core::profile::schema::OversizePolicy;
use std::path::Path;

use crate::output;

pub fn list() -> Result<(), DocbriefError> {
    println!("Available predefined profiles:\n");
    for name in builtin::PRESETS {
        let p = builtin::load_preset(name)?;
        println!("  {:<10} {} (v{}) [{}]", name, p.name, p.version, p.model);
        if let Some(ref desc) = p.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), DocbriefError> {
    let profile = builtin::load_preset(preset)?;
    output::json::print(&profile)
}

pub fn validate(file: &Path) -> Result<(), DocbriefError> {
    let p = docbrief_core::profile::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.", p.name, p.version);
    println!("  Model: {}", p.model);
    println!("  Temperature: {}", p.temperature);
    println!("  Max tokens: {}", p.max_tokens);
    let oversize = match p.oversize {
        OversizePolicy::SendAll => "send all text".to_string(),
        OversizePolicy::Reject { max_chars } => format!("reject above {max_chars} chars"),
        OversizePolicy::Truncate { max_chars } => format!("truncate to {max_chars} chars"),
    };
    println!("  Oversize input: {}", oversize);

    if matches!(p.oversize, OversizePolicy::SendAll) {
        println!("\nWarnings:");
        println!("  - long documents are sent whole and may exceed the model's context window");
    }

    Ok(())
}
