mod client;
mod endpoints;
mod error;
mod source;


pub use client::{ImageServer, fetch_url};
pub use endpoints::{DEFAULT_PREVIEW_SIZE, Endpoints};
pub use error::{RemoteError, Result};
pub use source::{DisplayImage, ImageSource, decode_image};
