//! Error types for message field access.
//!
//! Uses `thiserror` for typed variants that can be inspected by callers.
//! Unresolvable identifiers are deliberately absent here: resolution
//! failures surface as `None` from the dispatch path, not as errors.

use crate::registry::domain::MessageKind;
use thiserror::Error;

/// Errors raised by the unified field read on a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldLookupError {
    /// The name is absent from the declared surface and the properties
    /// namespace alike. Terminal; there is no further fallback layer.
    #[error("message '{kind}' has no field '{field}'")]
    FieldNotFound {
        /// Kind of the message the read was issued against.
        kind: MessageKind,
        /// The requested field name.
        field: String,
    },
}
