use std::sync::Arc;

use crate::config::{ConfigError, ViewerConfig};
use crate::remote::{ImageServer, ImageSource};

use super::{CatalogService, DownloadService, Result};

#[derive(Clone)]
pub struct AppContext {
    config: ViewerConfig,
    source: Option<Arc<dyn ImageSource>>,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppContext")
            .field("config", &self.config)
            .field("connected", &self.source.is_some())
            .finish()
    }
}

impl AppContext {
    /// Builds the HTTP client when the configuration names a server.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        let source = match config.endpoints() {
            Ok(endpoints) => {
                let server = ImageServer::new(endpoints, config.timeout());
                Some(Arc::new(server) as Arc<dyn ImageSource>)
            }
            Err(ConfigError::MissingServer) => None,
            Err(error) => return Err(error.into()),
        };
        Ok(Self { config, source })
    }

    pub fn with_source(config: ViewerConfig, source: Arc<dyn ImageSource>) -> Self {
        Self {
            config,
            source: Some(source),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn source(&self) -> Result<Arc<dyn ImageSource>> {
        Ok(self.source.clone().ok_or(ConfigError::MissingServer)?)
    }

    pub fn is_connected(&self) -> bool {
        self.source.is_some()
    }

    pub fn catalog_service(&self) -> CatalogService {
        CatalogService::new(self.source.clone())
    }

    pub fn download_service(&self) -> Result<DownloadService> {
        Ok(DownloadService::new(self.source()?))
    }
}
