use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::{Selection, Source, chronological_order, filter_by_source, filter_images};

/// The image listing of one server fetch, with its orderings and filters memoized.
#[derive(Debug, Clone)]
pub struct Catalog {
    paths: Arc<[String]>,
    ordered: Arc<[String]>,
    by_source: HashMap<Source, Arc<[String]>>,
    filtered: HashMap<Selection, Arc<[String]>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Catalog {
    pub fn new(paths: Vec<String>) -> Self {
        let ordered = chronological_order(&paths);
        Self {
            paths: Arc::from(paths),
            ordered: Arc::from(ordered),
            by_source: HashMap::new(),
            filtered: HashMap::new(),
        }
    }

    pub fn replace(&mut self, paths: Vec<String>) {
        *self = Self::new(paths);
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in the order the server listed them.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Paths newest first, undated ones trailing.
    pub fn ordered(&self) -> Arc<[String]> {
        self.ordered.clone()
    }

    pub fn for_source(&mut self, source: Source) -> Arc<[String]> {
        let paths = &self.paths;
        self.by_source
            .entry(source)
            .or_insert_with(|| Arc::from(filter_by_source(paths, source)))
            .clone()
    }

    pub fn select(&mut self, selection: &Selection) -> Arc<[String]> {
        if let Some(hit) = self.filtered.get(selection) {
            debug!(?selection, count = hit.len(), "filter cache hit");
            return hit.clone();
        }
        let matches: Arc<[String]> = Arc::from(filter_images(selection, &self.ordered));
        self.filtered.insert(*selection, matches.clone());
        matches
    }
}
