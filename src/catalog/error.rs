use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown satellite source: {0}")]
    UnknownSource(String),

    #[error("unknown image size: {0}")]
    UnknownSize(String),

    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    #[error("unknown overlay: {0}")]
    UnknownOverlay(String),
}
