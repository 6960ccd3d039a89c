//! Message construction, dispatch, and publication for crossbar.
//!
//! This module implements the message surface extensions share: typed
//! message instances with a declared field surface and a properties
//! fallback, the factory/dispatch service, and the in-memory bus.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Message`], [`domain::Properties`], [`domain::FieldValues`])
//! - **Ports**: Abstract trait interfaces ([`ports::MessagePublisher`], [`ports::MessageHandler`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessageBus`])
//! - **Services**: The dispatch workflow ([`services::MessageDispatchService`])
//!
//! # Example
//!
//! ```
//! use crossbar::bus::adapters::memory::InMemoryMessageBus;
//! use crossbar::bus::domain::FieldValues;
//! use crossbar::bus::services::MessageDispatchService;
//! use crossbar::registry::adapters::InMemoryTypeRegistry;
//! use crossbar::registry::domain::{Capability, MessageKind, TypeDescriptor};
//! use crossbar::registry::ports::TypeRegistry;
//! use mockable::DefaultClock;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(InMemoryTypeRegistry::new());
//! registry
//!     .register(
//!         MessageKind::new("commit-created").expect("valid kind"),
//!         TypeDescriptor::new(Capability::Message).with_declared_field("sha"),
//!     )
//!     .expect("registration should succeed");
//!
//! let bus = Arc::new(InMemoryMessageBus::new());
//! let dispatch = MessageDispatchService::new(registry, bus, Arc::new(DefaultClock));
//!
//! let message = dispatch
//!     .create("commit-created", FieldValues::new().with("sha", json!("abc123")))
//!     .expect("registered message kind");
//! assert_eq!(message.get("sha").expect("declared field"), &json!("abc123"));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
