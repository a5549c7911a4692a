use super::{Channel, ImageSize, Overlay, Source};

/// One combination of sidebar choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub source: Source,
    pub size: ImageSize,
    pub channel: Channel,
    pub overlay: Overlay,
}

impl Selection {
    pub fn for_source(source: Source) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.source.token())
            && path.contains(self.size.token())
            && path.contains(self.channel.token)
            && self.overlay.matches(path)
    }
}

pub fn filter_by_source(paths: &[String], source: Source) -> Vec<String> {
    paths
        .iter()
        .filter(|path| path.contains(source.token()))
        .cloned()
        .collect()
}

/// Keeps the paths matching every token of `selection`, preserving input order.
pub fn filter_images(selection: &Selection, sorted_paths: &[String]) -> Vec<String> {
    sorted_paths
        .iter()
        .filter(|path| selection.matches(path))
        .cloned()
        .collect()
}
