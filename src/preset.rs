//! Option presets: `StripOptions` saved as JSON behind a comment header.
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::StripOptions;

pub const PRESET_EXTENSION: &str = "exifstrip";

/// Renders a preset file: a `//` header followed by pretty JSON.
pub fn render_preset(options: &StripOptions) -> Result<String> {
    let mut content = String::new();
    content.push_str("// ==========================================\n");
    content.push_str("// exifstrip Options Preset\n");
    content.push_str("// ==========================================\n");
    content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
    content.push_str(&format!(
        "// Generated: {}\n",
        chrono::Utc::now().to_rfc3339()
    ));
    content.push_str("// Note: tool and folder paths are not included in presets\n");
    content.push_str("// ==========================================\n\n");
    content.push_str(&serde_json::to_string_pretty(options)?);
    content.push('\n');
    Ok(content)
}

/// Parses a preset, skipping everything before the first `{`.
pub fn parse_preset(content: &str) -> Result<StripOptions> {
    let json_start = content
        .find('{')
        .ok_or_else(|| Error::InvalidPreset("no JSON content found".to_string()))?;
    Ok(serde_json::from_str(&content[json_start..])?)
}

pub fn save_preset(path: &Path, options: &StripOptions) -> Result<()> {
    fs::write(path, render_preset(options)?)?;
    tracing::info!("Preset saved to: {:?}", path);
    Ok(())
}

pub fn load_preset(path: &Path) -> Result<StripOptions> {
    let content = fs::read_to_string(path)?;
    let options = parse_preset(&content)?;
    tracing::info!("Preset loaded from: {:?}", path);
    Ok(options)
}
