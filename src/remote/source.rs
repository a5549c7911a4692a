use crate::catalog::Source;

use super::Result;

/// Decoded RGBA pixels ready to hand to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_image(bytes: &[u8]) -> Result<DisplayImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DisplayImage {
        width: width as usize,
        height: height as usize,
        rgba: rgba.into_raw(),
    })
}

pub trait ImageSource: Send + Sync {
    fn list_images(&self) -> Result<Vec<String>>;
    fn fetch_preview(&self, path: &str) -> Result<Vec<u8>>;
    fn fetch_full(&self, path: &str) -> Result<Vec<u8>>;

    /// Fetches what the viewer shows for `path`: the full image for sources
    /// that only publish full images, the server-side preview otherwise.
    fn fetch_display(&self, path: &str, source: Source) -> Result<DisplayImage> {
        let bytes = if source.serves_full_images() {
            self.fetch_full(path)?
        } else {
            self.fetch_preview(path)?
        };
        decode_image(&bytes)
    }
}
