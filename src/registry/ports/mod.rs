//! Port contracts for the message-kind catalogue.

mod registry;

pub use registry::{TypeRegistry, TypeRegistryError, TypeRegistryResult};
