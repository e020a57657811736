//! Core error types for kava-symbols crate
//!
//! Three families live here:
//!
//! - [`ClassFormatError`]: a malformed type descriptor, method signature or name. These are
//!   recoverable; the class-loading layer reports them and rejects the offending class.
//! - [`SymbolError`]: codec and strict-lookup failures.
//! - [`ConfigError`]: invalid [`SymbolTableConfig`](crate::config::SymbolTableConfig) values.
//!
//! Broken internal invariants (out-of-range indexing, registering after a freeze) are not
//! represented here; they panic.

use thiserror::Error;

/// Grammar error raised while validating or parsing descriptors and signatures.
///
/// Every variant records the byte offset where the problem was detected, relative to the
/// start of the buffer handed to the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassFormatError {
    /// Input ended inside a descriptor
    #[error("Unexpected end of descriptor at offset {at}")]
    UnexpectedEnd { at: usize },

    /// A byte that cannot start a field type
    #[error("Invalid type descriptor character {found:?} at offset {at}")]
    InvalidTypeChar { at: usize, found: char },

    /// Class name not terminated by `;`
    #[error("Class name not terminated by ';' at offset {at}")]
    MissingSemicolon { at: usize },

    /// `L;`
    #[error("Empty class name at offset {at}")]
    EmptyClassName { at: usize },

    /// Array nesting deeper than 255
    #[error("Array type with {dims} dimensions exceeds the limit of 255")]
    ArrayTooDeep { dims: usize },

    /// `V` used as an array element or a parameter
    #[error("Void type not allowed at offset {at}")]
    VoidNotAllowed { at: usize },

    /// The descriptor did not consume the whole input
    #[error("Descriptor ends at offset {end} but input has {len} bytes")]
    TrailingBytes { end: usize, len: usize },

    /// Signature does not open with `(`
    #[error("Method signature must start with '(' at offset {at}")]
    MissingParenthesis { at: usize },

    /// A class, field or method name failed validation
    #[error("Invalid name: {name}")]
    InvalidName { name: String },
}

/// Error type for codec and lookup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Bytes are not well-formed modified UTF-8
    #[error("Malformed modified UTF-8 at offset {at}: {reason}")]
    MalformedUtf8 { at: usize, reason: &'static str },

    /// No canonical symbol exists for the requested content
    #[error("Symbol not found")]
    NotFound,
}

/// Error type for symbol table configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Initial capacity must be positive
    #[error("Invalid initial capacity: {0}")]
    InvalidCapacity(usize),

    /// Shard amount must be a power of two greater than one
    #[error("Invalid shard amount: {0} (must be a power of two greater than 1)")]
    InvalidShardAmount(usize),
}

/// Result type alias for grammar operations
pub type ClassFormatResult<T> = std::result::Result<T, ClassFormatError>;

/// Result type alias for symbol operations
pub type SymbolResult<T> = std::result::Result<T, SymbolError>;

/// Result type alias for configuration checks
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
