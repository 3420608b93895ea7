use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid event catalog: {0}")]
    InvalidCatalog(String),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
