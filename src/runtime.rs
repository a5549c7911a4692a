mod catalog_service;
mod context;
mod download_service;
mod error;

#[cfg(test)]
mod tests;

pub use catalog_service::CatalogService;
pub use context::AppContext;
pub use download_service::DownloadService;
pub use error::{AppError, Result};
