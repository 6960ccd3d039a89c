//! Validated symbolic identifier for a registered message kind.

use super::RegistryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated symbolic message kind, e.g. `commit-created`.
///
/// Kinds are the lookup keys of the registry and the `id` field of every
/// message constructed through the dispatch path.
///
/// # Examples
///
/// ```
/// use crossbar::registry::domain::MessageKind;
///
/// let kind = MessageKind::new("commit-created").expect("valid kind");
/// assert_eq!(kind.as_str(), "commit-created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageKind(String);

impl MessageKind {
    /// Creates a validated message kind.
    ///
    /// The input is trimmed. Only characters in `[a-z0-9-.]` are accepted,
    /// so kinds read as stable kebab-case identifiers rather than free
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryDomainError`] when validation fails.
    pub fn new(value: impl Into<String>) -> Result<Self, RegistryDomainError> {
        let normalized = value.into().trim().to_owned();

        if normalized.is_empty() {
            return Err(RegistryDomainError::EmptyKind);
        }

        let is_valid = normalized.chars().all(|character| {
            character.is_ascii_lowercase()
                || character.is_ascii_digit()
                || character == '-'
                || character == '.'
        });
        if !is_valid {
            return Err(RegistryDomainError::InvalidKind(normalized));
        }

        Ok(Self(normalized))
    }

    /// Returns the kind as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
