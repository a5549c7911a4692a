use std::fs;
use std::path::Path;

use tracing::info;

use super::{Result, ViewerConfig};

pub fn load_config(path: impl AsRef<Path>) -> Result<ViewerConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let config = if matches!(extension.as_str(), "yaml" | "yml") {
        serde_yaml::from_str::<ViewerConfig>(&raw)?
    } else {
        serde_json::from_str::<ViewerConfig>(&raw)?
    };
    config.validate()?;
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}
