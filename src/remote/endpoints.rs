use crate::catalog::Source;

pub const DEFAULT_PREVIEW_SIZE: u32 = 700;

/// URL layout of the image server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    preview_width: u32,
    preview_height: u32,
}

impl Endpoints {
    pub fn new(base_url: &str, preview_width: u32, preview_height: u32) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
            preview_width,
            preview_height,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn listing(&self) -> String {
        format!("{}/images", self.base)
    }

    pub fn preview(&self, path: &str) -> String {
        format!(
            "{}/preview/{path}?width={}&height={}",
            self.base, self.preview_width, self.preview_height
        )
    }

    pub fn full(&self, path: &str) -> String {
        format!("{}/image/{path}", self.base)
    }

    pub fn display(&self, path: &str, source: Source) -> String {
        if source.serves_full_images() {
            self.full(path)
        } else {
            self.preview(path)
        }
    }
}
