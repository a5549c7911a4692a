use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration JSON parse failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("configuration YAML parse failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("no image server configured; pass --server or set server_url in the config file")]
    MissingServer,

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
