use crate::catalog::{
    Catalog, Channel, ImageSize, Overlay, Selection, Source, available_channels, available_sizes,
    overlays_for,
};

/// Sidebar choices plus the options each selector currently offers.
///
/// Size and channel options come from the paths of the selected source only;
/// overlay options depend on the source alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarState {
    pub source: Source,
    pub size: ImageSize,
    pub channel: Channel,
    pub overlay: Overlay,
    sizes: Vec<ImageSize>,
    channels: Vec<Channel>,
}

impl SidebarState {
    pub fn new(catalog: &mut Catalog) -> Self {
        let mut state = Self {
            source: Source::default(),
            size: ImageSize::default(),
            channel: Channel::default(),
            overlay: Overlay::default(),
            sizes: Vec::new(),
            channels: Vec::new(),
        };
        state.refresh(catalog);
        state
    }

    pub fn sizes(&self) -> &[ImageSize] {
        &self.sizes
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn overlays(&self) -> &'static [Overlay] {
        overlays_for(self.source)
    }

    pub fn set_source(&mut self, catalog: &mut Catalog, source: Source) {
        self.source = source;
        self.refresh(catalog);
    }

    /// Recomputes the offered options and drops choices no longer offered.
    pub fn refresh(&mut self, catalog: &mut Catalog) {
        let source_paths = catalog.for_source(self.source);
        self.sizes = available_sizes(&source_paths);
        self.channels = available_channels(&source_paths);

        if !self.sizes.contains(&self.size) {
            self.size = self.sizes.first().copied().unwrap_or_default();
        }
        if !self.channels.contains(&self.channel) {
            self.channel = self.channels.first().copied().unwrap_or_default();
        }
        let overlays = self.overlays();
        if !overlays.contains(&self.overlay) {
            self.overlay = overlays.first().copied().unwrap_or_default();
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            source: self.source,
            size: self.size,
            channel: self.channel,
            overlay: self.overlay,
        }
    }
}
