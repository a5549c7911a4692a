use std::sync::Arc;

use tracing::{info, warn};

use crate::remote::ImageSource;
use crate::session::ViewerSession;

#[derive(Clone)]
pub struct CatalogService {
    source: Option<Arc<dyn ImageSource>>,
}

impl CatalogService {
    pub fn new(source: Option<Arc<dyn ImageSource>>) -> Self {
        Self { source }
    }

    /// Lists every image on the server. A failed listing is logged and
    /// reads as an empty catalog.
    pub fn fetch_listing(&self) -> Vec<String> {
        let Some(source) = &self.source else {
            warn!("no image server configured, catalog is empty");
            return Vec::new();
        };
        match source.list_images() {
            Ok(paths) => {
                info!(count = paths.len(), "fetched image listing");
                paths
            }
            Err(error) => {
                warn!(%error, "image listing unavailable");
                Vec::new()
            }
        }
    }

    pub fn load_session(&self) -> ViewerSession {
        ViewerSession::new(self.fetch_listing())
    }
}
