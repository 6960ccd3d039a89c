//! Error types for registry domain validation.

use thiserror::Error;

/// Errors returned while constructing registry domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryDomainError {
    /// The message kind is empty after trimming.
    #[error("message kind must not be empty")]
    EmptyKind,

    /// The message kind contains characters outside `[a-z0-9-.]`.
    #[error(
        "message kind '{0}' contains invalid characters (only lowercase alphanumeric, hyphens and dots allowed)"
    )]
    InvalidKind(String),
}
