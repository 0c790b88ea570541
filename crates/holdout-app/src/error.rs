use holdout_core::error::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to start game loop thread: {0}")]
    Io(#[from] std::io::Error),
    #[error("game loop is no longer running")]
    LoopStopped,
    #[error("invalid argument: {0}")]
    Usage(String),
}
