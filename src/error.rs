use std::io;
use std::path::PathBuf;

/// Errors surfaced by the handler as the failed half of its completion.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("Invalid HTTP status code: {0}")]
    InvalidStatus(u16),

    #[error("Failed to serialize response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Can't read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
