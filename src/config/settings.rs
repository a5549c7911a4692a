use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::remote::{DEFAULT_PREVIEW_SIZE, Endpoints};

use super::{ConfigError, Result};

pub const DEFAULT_ICON_URL: &str =
    "https://raw.githubusercontent.com/JimmyeJones/Websat/main/icon.jpg";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Base URL of the image server, e.g. `http://192.168.1.20:5000`.
    #[serde(alias = "IP", alias = "ip")]
    pub server_url: Option<String>,
    pub preview_width: u32,
    pub preview_height: u32,
    pub timeout_secs: u64,
    pub window_title: String,
    pub icon_url: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            preview_width: DEFAULT_PREVIEW_SIZE,
            preview_height: DEFAULT_PREVIEW_SIZE,
            timeout_secs: 30,
            window_title: "Websat".to_string(),
            icon_url: Some(DEFAULT_ICON_URL.to_string()),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.server_url {
            let trimmed = url.trim();
            if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "server_url `{url}` must start with http:// or https://"
                )));
            }
        }
        if self.preview_width == 0 || self.preview_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "preview size must be non-zero, found {}x{}",
                self.preview_width, self.preview_height
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Replaces the server URL when `server` is set, keeping the file value otherwise.
    pub fn with_server(mut self, server: Option<String>) -> Self {
        if let Some(server) = server.filter(|value| !value.trim().is_empty()) {
            self.server_url = Some(server.trim().to_string());
        }
        self
    }

    pub fn server_url(&self) -> Result<&str> {
        self.server_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingServer)
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        Ok(Endpoints::new(
            self.server_url()?,
            self.preview_width,
            self.preview_height,
        ))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
