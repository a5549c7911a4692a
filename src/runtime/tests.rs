use std::collections::HashMap;
use std::sync::Arc;

use tempfile::tempdir;

use crate::config::{ConfigError, ViewerConfig};
use crate::remote::{ImageSource, RemoteError, Result as RemoteResult};

use super::{AppContext, AppError, DownloadService};

#[derive(Default)]
struct MemorySource {
    listing: Option<Vec<String>>,
    images: HashMap<String, Vec<u8>>,
}

impl ImageSource for MemorySource {
    fn list_images(&self) -> RemoteResult<Vec<String>> {
        self.listing.clone().ok_or(RemoteError::Status(500))
    }

    fn fetch_preview(&self, path: &str) -> RemoteResult<Vec<u8>> {
        self.fetch_full(path)
    }

    fn fetch_full(&self, path: &str) -> RemoteResult<Vec<u8>> {
        self.images.get(path).cloned().ok_or(RemoteError::Status(404))
    }
}

fn context_with(source: MemorySource) -> AppContext {
    AppContext::with_source(ViewerConfig::default(), Arc::new(source))
}

#[test]
fn context_without_server_is_disconnected() {
    let context = AppContext::new(ViewerConfig::default()).expect("context");
    assert!(!context.is_connected());
    assert!(context.catalog_service().fetch_listing().is_empty());
    assert!(matches!(
        context.download_service(),
        Err(AppError::Config(ConfigError::MissingServer))
    ));
}

#[test]
fn context_rejects_invalid_config() {
    let config = ViewerConfig {
        server_url: Some("sat.local".to_string()),
        ..ViewerConfig::default()
    };
    assert!(matches!(
        AppContext::new(config),
        Err(AppError::Config(ConfigError::Invalid(_)))
    ));
}

#[test]
fn context_with_server_is_connected() {
    let config = ViewerConfig::default().with_server(Some("http://127.0.0.1:9".to_string()));
    let context = AppContext::new(config).expect("context");
    assert!(context.is_connected());
}

#[test]
fn failed_listing_reads_as_empty_catalog() {
    let context = context_with(MemorySource::default());
    let session = context.catalog_service().load_session();
    assert!(session.catalog().is_empty());
    assert_eq!(session.found_text(), "Found 0 images.");
}

#[test]
fn listing_feeds_the_session() {
    let context = context_with(MemorySource {
        listing: Some(vec![
            "GOES-18/Full Disk/2024-01-01_00-00-00/a.png".to_string(),
            "GOES-16/Full Disk/2024-01-01_00-00-00/b.png".to_string(),
        ]),
        ..MemorySource::default()
    });
    let session = context.catalog_service().load_session();
    assert_eq!(session.catalog().len(), 2);
    assert_eq!(session.found_text(), "Found 1 images.");
}

#[test]
fn download_writes_full_image() {
    let dir = tempdir().expect("tempdir");
    let mut images = HashMap::new();
    images.insert("NWS/radar/latest.jpg".to_string(), vec![1, 2, 3]);
    let context = context_with(MemorySource {
        images,
        ..MemorySource::default()
    });
    let service = context.download_service().expect("download service");
    let target = dir.path().join("saved.jpg");
    let written = service
        .download("NWS/radar/latest.jpg", Some(target.as_path()))
        .expect("download");
    assert_eq!(written, target);
    assert_eq!(std::fs::read(&target).expect("read back"), vec![1, 2, 3]);

    let missing = service.download("NWS/radar/other.jpg", Some(target.as_path()));
    assert!(matches!(
        missing,
        Err(AppError::Remote(RemoteError::Status(404)))
    ));
}

#[test]
fn default_download_target_is_file_name() {
    assert_eq!(
        DownloadService::default_target("GOES-16/Full Disk/2024-01-01_00-00-00/a.png"),
        std::path::PathBuf::from("a.png")
    );
}
