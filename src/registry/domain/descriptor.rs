//! Type descriptors recording what the registry knows about a kind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Capability tag of a registered type.
///
/// The dispatch path only constructs types tagged [`Capability::Message`].
/// Other capabilities exist in the catalogue (extensions register services
/// alongside their message surface) but are never instantiated through the
/// factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// A message type: constructible and publishable through the bus.
    Message,

    /// A service type: resolvable by extensions but not a message.
    Service,
}

impl Capability {
    /// Returns `true` for the message capability.
    #[must_use]
    pub const fn is_message(self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => formatter.write_str("message"),
            Self::Service => formatter.write_str("service"),
        }
    }
}

/// Descriptor for one registered type.
///
/// Records the capability tag and the set of field names the type declares.
/// Supplied fields outside the declared set land in a message's properties
/// namespace rather than on its declared surface. The reserved `id` field
/// is always present on messages and never needs declaring.
///
/// # Examples
///
/// ```
/// use crossbar::registry::domain::{Capability, TypeDescriptor};
///
/// let descriptor = TypeDescriptor::new(Capability::Message).with_declared_field("sha");
/// assert!(descriptor.declares("sha"));
/// assert!(!descriptor.declares("author"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Capability tag of the described type.
    capability: Capability,

    /// Field names present on the declared surface.
    declared_fields: BTreeSet<String>,
}

impl TypeDescriptor {
    /// Creates a descriptor with no declared fields.
    #[must_use]
    pub const fn new(capability: Capability) -> Self {
        Self {
            capability,
            declared_fields: BTreeSet::new(),
        }
    }

    /// Adds one declared field name.
    #[must_use]
    pub fn with_declared_field(mut self, name: impl Into<String>) -> Self {
        self.declared_fields.insert(name.into());
        self
    }

    /// Returns the capability tag.
    #[must_use]
    pub const fn capability(&self) -> Capability {
        self.capability
    }

    /// Returns `true` when `name` is on the declared surface.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.declared_fields.contains(name)
    }

    /// Returns the declared field names in lexical order.
    #[must_use]
    pub const fn declared_fields(&self) -> &BTreeSet<String> {
        &self.declared_fields
    }
}
