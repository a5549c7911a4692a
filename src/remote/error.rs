use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemoteError>;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("image server responded with status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("malformed image listing: {0}")]
    Listing(#[from] serde_json::Error),
}

impl From<ureq::Error> for RemoteError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => Self::Status(code),
            ureq::Error::Transport(transport) => Self::Transport(transport.to_string()),
        }
    }
}

impl RemoteError {
    /// Text shown in place of an image that could not be loaded.
    pub fn inline_message(&self) -> String {
        match self {
            Self::Status(code) => format!("Error loading preview: {code}"),
            other => format!("Exception loading preview: {other}"),
        }
    }
}
