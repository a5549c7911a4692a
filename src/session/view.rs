use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Frame,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [Self::List, Self::Frame];

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List view",
            Self::Frame => "Frame view",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

/// How many images the list view loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(usize);

impl ListLimit {
    pub const MIN: usize = 5;
    pub const MAX: usize = 50;
    pub const STEP: usize = 5;

    /// Clamps into `MIN..=MAX` and rounds down to a multiple of `STEP`.
    pub fn new(value: usize) -> Self {
        let clamped = value.clamp(Self::MIN, Self::MAX);
        Self(clamped - clamped % Self::STEP)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn visible(self, paths: &[String]) -> &[String] {
        &paths[..paths.len().min(self.0)]
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

/// Position of the frame view inside the filtered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCursor {
    index: usize,
}

impl FrameCursor {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn next(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    pub fn current(self, paths: &[String]) -> Option<&String> {
        paths.get(self.index)
    }

    pub fn position_text(self, len: usize) -> String {
        if len == 0 {
            "No images found.".to_string()
        } else {
            format!("Image {} of {len}", self.index.min(len - 1) + 1)
        }
    }
}
