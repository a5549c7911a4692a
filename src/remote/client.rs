use std::io::Read;
use std::time::Duration;

use tracing::debug;

use super::{Endpoints, ImageSource, RemoteError, Result};

const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

/// Blocking HTTP client for the image server.
#[derive(Clone)]
pub struct ImageServer {
    agent: ureq::Agent,
    endpoints: Endpoints,
}

impl std::fmt::Debug for ImageServer {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ImageServer")
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

impl ImageServer {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        get_bytes(&self.agent, url)
    }
}

/// One-off GET outside the image server, e.g. for the window icon.
pub fn fetch_url(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();
    get_bytes(&agent, url)
}

fn get_bytes(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>> {
    debug!(url, "requesting");
    let response = agent.get(url).call()?;
    let status = response.status();
    if status != 200 {
        return Err(RemoteError::Status(status));
    }
    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut bytes)?;
    debug!(url, bytes = bytes.len(), "received");
    Ok(bytes)
}

impl ImageSource for ImageServer {
    fn list_images(&self) -> Result<Vec<String>> {
        let bytes = self.get_bytes(&self.endpoints.listing())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn fetch_preview(&self, path: &str) -> Result<Vec<u8>> {
        self.get_bytes(&self.endpoints.preview(path))
    }

    fn fetch_full(&self, path: &str) -> Result<Vec<u8>> {
        self.get_bytes(&self.endpoints.full(path))
    }
}
