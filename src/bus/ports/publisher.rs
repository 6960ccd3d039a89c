//! Publisher port for placing messages on the bus.

use crate::bus::domain::Message;
use thiserror::Error;

/// Result type for publication operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Port for the bus's publish-one-message primitive.
///
/// Implementations fan the message out to whatever listeners they manage.
/// A message nobody listens to is still published successfully; delivery
/// to zero recipients is not an error.
pub trait MessagePublisher: Send + Sync {
    /// Publishes one message.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] when the bus itself fails; expected
    /// outcomes such as an empty recipient set are not errors.
    fn publish(&self, message: &Message) -> PublishResult<()>;
}

/// Errors returned by bus implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishError {
    /// The subscription table lock was poisoned by a panicking writer.
    #[error("bus lock poisoned: {0}")]
    LockPoisoned(String),
}
