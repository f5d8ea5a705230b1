//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything here is a configuration mistake caught at construction time.
/// Out-of-bounds coordinates are never errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid grid dimensions {cols}x{rows}")]
    InvalidDimensions { cols: i32, rows: i32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
