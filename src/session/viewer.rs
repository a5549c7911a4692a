use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, Source};

use super::{FrameCursor, ListLimit, SidebarState, ViewMode};

/// Everything the viewer needs to decide which images to show.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    catalog: Catalog,
    pub sidebar: SidebarState,
    pub mode: ViewMode,
    pub limit: ListLimit,
    pub cursor: FrameCursor,
    filtered: Arc<[String]>,
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ViewerSession {
    pub fn new(paths: Vec<String>) -> Self {
        let mut catalog = Catalog::new(paths);
        let sidebar = SidebarState::new(&mut catalog);
        let filtered = catalog.select(&sidebar.selection());
        Self {
            catalog,
            sidebar,
            mode: ViewMode::default(),
            limit: ListLimit::default(),
            cursor: FrameCursor::default(),
            filtered,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn replace_listing(&mut self, paths: Vec<String>) {
        self.catalog.replace(paths);
        self.update();
    }

    pub fn set_source(&mut self, source: Source) {
        self.sidebar.set_source(&mut self.catalog, source);
        self.update();
    }

    /// Re-derives options and the filtered list after any sidebar edit.
    pub fn update(&mut self) {
        self.sidebar.refresh(&mut self.catalog);
        let selection = self.sidebar.selection();
        self.filtered = self.catalog.select(&selection);
        self.cursor.clamp(self.filtered.len());
        debug!(?selection, found = self.filtered.len(), "selection updated");
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn found_text(&self) -> String {
        format!("Found {} images.", self.filtered.len())
    }

    /// Paths the current view mode displays.
    pub fn visible(&self) -> &[String] {
        match self.mode {
            ViewMode::List => self.limit.visible(&self.filtered),
            ViewMode::Frame => {
                let index = self.cursor.index();
                if index < self.filtered.len() {
                    &self.filtered[index..=index]
                } else {
                    &[]
                }
            }
        }
    }

    pub fn next_frame(&mut self) {
        self.cursor.next(self.filtered.len());
    }

    pub fn previous_frame(&mut self) {
        self.cursor.previous();
    }

    pub fn reset_frame(&mut self) {
        self.cursor.reset();
    }
}
