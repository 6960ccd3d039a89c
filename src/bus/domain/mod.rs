//! Domain types for the bus subsystem.
//!
//! This module contains pure domain types with no infrastructure
//! dependencies. Messages are immutable after construction and
//! serialisable via serde.

mod fields;
mod ids;
mod message;
mod properties;

pub use fields::FieldValues;
pub use ids::SubscriberId;
pub use message::{Message, RESERVED_ID_FIELD};
pub use properties::Properties;
