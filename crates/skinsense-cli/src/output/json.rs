use serde::Serialize;
use skinsense_core::error::SkinSenseError;

pub fn print<T: Serialize>(result: &T) -> Result<(), SkinSenseError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
