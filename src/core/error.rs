use thiserror::Error;

use crate::command::resolver::ResolutionError;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Roster error: {0}")]
    Roster(#[from] crate::world::loader::LoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
