//! Error types for the kavap CLI.

use kava_symbols::{ClassFormatError, ConfigError};
use thiserror::Error;

/// Everything a kavap command can fail with.
#[derive(Error, Debug)]
pub enum KavapError {
    /// Configuration file missing, unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Symbol table settings rejected by the library.
    #[error("Invalid symbol table settings: {0}")]
    TableConfig(#[from] ConfigError),

    /// Input is not a well-formed descriptor or signature.
    #[error("Class format error: {0}")]
    ClassFormat(#[from] ClassFormatError),

    /// Nothing to work on, or conflicting inputs.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KavapError>;
