use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::catalog::file_name;
use crate::remote::ImageSource;

use super::Result;

#[derive(Clone)]
pub struct DownloadService {
    source: Arc<dyn ImageSource>,
}

impl DownloadService {
    pub fn new(source: Arc<dyn ImageSource>) -> Self {
        Self { source }
    }

    /// Where a download of `path` lands when no target is given.
    pub fn default_target(path: &str) -> PathBuf {
        PathBuf::from(file_name(path))
    }

    /// Fetches the full-resolution image and writes it to `target`,
    /// or to the image's file name in the working directory.
    pub fn download(&self, path: &str, target: Option<&Path>) -> Result<PathBuf> {
        let target = target
            .map(Path::to_path_buf)
            .unwrap_or_else(|| Self::default_target(path));
        let bytes = self.source.fetch_full(path)?;
        fs::write(&target, &bytes)?;
        info!(path, target = %target.display(), bytes = bytes.len(), "saved full resolution image");
        Ok(target)
    }
}
