mod cache;
mod error;
mod filter;
mod folders;
mod order;
mod selectors;
mod timestamp;


pub use cache::Catalog;
pub use error::CatalogError;
pub use filter::{Selection, filter_by_source, filter_images};
pub use folders::{file_name, folders, in_folder, parent_folder};
pub use order::chronological_order;
pub use selectors::{
    CHANNELS, Channel, ImageSize, Overlay, Source, available_channels, available_sizes,
    overlays_for,
};
pub use timestamp::{CAPTURE_TIME_FORMAT, capture_time};
