use std::path::PathBuf;

use textcheck_model::RequestError;

/// Failure reported by an external collaborator (engine or serializer).
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure of a complete check request.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("checking engine failed: {0}")]
    Engine(#[source] EngineError),

    #[error("serializing check results failed: {0}")]
    Serialize(#[source] EngineError),
}

impl HandleError {
    /// Client errors map to 400, collaborator failures to 500.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Request(error) => error.status_code(),
            Self::Engine(_) | Self::Serialize(_) => 500,
        }
    }
}
