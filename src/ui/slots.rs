use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Load state of one image, keyed by display URL in [`ImageSlots`].
#[derive(Debug, Clone)]
pub(super) enum ImageSlot<T> {
    Loading,
    Ready(T),
    Failed(String),
}

/// Image state keyed by the URL it was loaded from. `T` is the uploaded texture.
#[derive(Debug)]
pub(super) struct ImageSlots<T> {
    slots: HashMap<String, ImageSlot<T>>,
}

impl<T> Default for ImageSlots<T> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<T> ImageSlots<T> {
    /// Marks `url` as loading; `false` when it is already known.
    pub(super) fn begin(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), ImageSlot::Loading);
        true
    }

    pub(super) fn finish(&mut self, url: String, result: Result<T, String>) {
        let slot = match result {
            Ok(texture) => ImageSlot::Ready(texture),
            Err(message) => ImageSlot::Failed(message),
        };
        self.slots.insert(url, slot);
    }

    pub(super) fn get(&self, url: &str) -> Option<&ImageSlot<T>> {
        self.slots.get(url)
    }

    pub(super) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(super) fn loading(&self) -> usize {
        self.slots
            .values()
            .filter(|slot| matches!(slot, ImageSlot::Loading))
            .count()
    }

    /// Forgets failures so the next frame retries them.
    pub(super) fn forget_failures(&mut self) {
        self.slots
            .retain(|_, slot| !matches!(slot, ImageSlot::Failed(_)));
    }

    /// Drops loaded or failed images outside `keep`. Loads in flight stay
    /// so their results are not requested twice.
    pub(super) fn evict_except(&mut self, keep: &HashSet<String>) -> usize {
        let before = self.slots.len();
        self.slots
            .retain(|url, slot| matches!(slot, ImageSlot::Loading) || keep.contains(url));
        before - self.slots.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum DownloadState {
    Running,
    Saved(PathBuf),
    Failed(String),
}

impl DownloadState {
    pub(super) fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub(super) fn status_text(&self) -> String {
        match self {
            Self::Running => "Downloading full resolution...".to_string(),
            Self::Saved(path) => format!("Saved to {}", path.display()),
            Self::Failed(message) => format!("Download failed: {message}"),
        }
    }
}
