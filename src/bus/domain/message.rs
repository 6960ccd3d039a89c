//! The Message instance constructed and published by the dispatch path.
//!
//! Messages are immutable after creation. Reads go through a single
//! unified surface: declared fields first, then the properties namespace.

use super::{FieldValues, Properties};
use crate::bus::error::FieldLookupError;
use crate::registry::domain::{MessageKind, TypeDescriptor};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Reserved field name carrying the message kind.
///
/// Injected on every message at construction; a caller-supplied value
/// under this name is discarded.
pub const RESERVED_ID_FIELD: &str = "id";

/// A typed, identifier-tagged message.
///
/// Constructed per dispatch call from a kind's descriptor and the supplied
/// field values; ownership transfers to the caller (or to the bus when
/// sent). The reserved `id` field always equals the kind. Supplied fields
/// the descriptor declares live on the declared surface; the remainder
/// live in the properties namespace, reachable through the same [`get`]
/// operation.
///
/// # Invariants
///
/// - `get(RESERVED_ID_FIELD)` always yields the kind as a JSON string
/// - A name present on both surfaces resolves to the declared value
/// - Messages cannot be modified after creation
///
/// [`get`]: Message::get
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The kind this message was created under.
    kind: MessageKind,

    /// Declared field values, including the injected `id`.
    declared: BTreeMap<String, Value>,

    /// Fields supplied but not declared by the descriptor.
    properties: Properties,

    /// When the message was created.
    created_at: DateTime<Utc>,
}

impl Message {
    /// Composes a message from a descriptor and the supplied fields.
    ///
    /// Fields named in the descriptor's declared set land on the declared
    /// surface; all others land in the properties namespace. The reserved
    /// `id` field is injected from `kind`, overriding any supplied value.
    #[must_use]
    pub fn compose(
        kind: MessageKind,
        descriptor: &TypeDescriptor,
        fields: FieldValues,
        clock: &impl Clock,
    ) -> Self {
        let mut declared = BTreeMap::new();
        let mut properties = Properties::new();

        for (name, value) in fields {
            if name == RESERVED_ID_FIELD {
                continue;
            }
            if descriptor.declares(&name) {
                declared.insert(name, value);
            } else {
                properties.insert(name, value);
            }
        }

        declared.insert(
            RESERVED_ID_FIELD.to_owned(),
            Value::String(kind.as_str().to_owned()),
        );

        Self {
            kind,
            declared,
            properties,
            created_at: clock.utc(),
        }
    }

    /// Returns the message kind.
    #[must_use]
    pub const fn kind(&self) -> &MessageKind {
        &self.kind
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reads one field through the unified surface.
    ///
    /// The declared surface is consulted first and a declared value is
    /// returned without touching the properties namespace. The fallback
    /// triggers on exactly one condition, the name not being declared;
    /// in this representation the primary lookup has no other way to
    /// fail, so nothing unrelated can be masked by falling through.
    ///
    /// # Errors
    ///
    /// Returns [`FieldLookupError::FieldNotFound`] when the name is absent
    /// from both surfaces. There is no further fallback.
    pub fn get(&self, name: &str) -> Result<&Value, FieldLookupError> {
        if let Some(value) = self.declared.get(name) {
            return Ok(value);
        }

        self.properties
            .get(name)
            .ok_or_else(|| FieldLookupError::FieldNotFound {
                kind: self.kind.clone(),
                field: name.to_owned(),
            })
    }

    /// Returns the value under `name` on the declared surface only.
    #[must_use]
    pub fn declared_value(&self, name: &str) -> Option<&Value> {
        self.declared.get(name)
    }

    /// Returns the properties namespace.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }
}
