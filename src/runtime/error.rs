use crate::config::ConfigError;
use crate::remote::RemoteError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("image server error: {0}")]
    Remote(#[from] RemoteError),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
