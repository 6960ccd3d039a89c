//! Registry port for message-kind registration and resolution.

use crate::registry::domain::{MessageKind, TypeDescriptor};
use thiserror::Error;

/// Result type for registry operations.
pub type TypeRegistryResult<T> = Result<T, TypeRegistryError>;

/// Catalogue contract for registered message kinds.
///
/// Registration and removal are host-application operations; the dispatch
/// path only ever calls [`TypeRegistry::lookup`]. Absence of a kind is a
/// normal resolution outcome, not an error, which is why `lookup` returns
/// an `Option` rather than a `Result`.
pub trait TypeRegistry: Send + Sync {
    /// Stores a descriptor under a new kind.
    ///
    /// # Errors
    ///
    /// Returns [`TypeRegistryError::DuplicateKind`] when the kind is
    /// already registered.
    fn register(
        &self,
        kind: MessageKind,
        descriptor: TypeDescriptor,
    ) -> TypeRegistryResult<()>;

    /// Removes a registered kind.
    ///
    /// # Errors
    ///
    /// Returns [`TypeRegistryError::KindNotFound`] when the kind is not
    /// registered.
    fn unregister(&self, kind: &MessageKind) -> TypeRegistryResult<()>;

    /// Resolves a kind to its descriptor, or `None` when unregistered.
    fn lookup(&self, kind: &MessageKind) -> Option<TypeDescriptor>;

    /// Returns `true` when the kind is registered.
    fn contains(&self, kind: &MessageKind) -> bool {
        self.lookup(kind).is_some()
    }

    /// Returns all registered kinds.
    fn registered_kinds(&self) -> Vec<MessageKind>;
}

/// Errors returned by registry implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeRegistryError {
    /// A descriptor is already stored under this kind.
    #[error("duplicate message kind: {0}")]
    DuplicateKind(MessageKind),

    /// The kind is not registered.
    #[error("message kind not found: {0}")]
    KindNotFound(MessageKind),

    /// The catalogue lock was poisoned by a panicking writer.
    #[error("registry lock poisoned: {0}")]
    LockPoisoned(String),
}
