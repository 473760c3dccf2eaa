use docbrief_core::error::DocbriefError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), DocbriefError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
