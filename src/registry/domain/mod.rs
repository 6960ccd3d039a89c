//! Domain model for the message-kind catalogue.
//!
//! The registry domain models validated message kinds, the capability tag
//! distinguishing message types from other registered types, and the
//! descriptor recording which fields a kind declares. Infrastructure
//! concerns remain outside this boundary.

mod descriptor;
mod error;
mod kind;

pub use descriptor::{Capability, TypeDescriptor};
pub use error::RegistryDomainError;
pub use kind::MessageKind;
