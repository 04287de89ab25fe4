use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load {}: {message}", path.display())]
    DataLoad { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
