//! Shared test helpers for in-memory adapter integration tests.

use crossbar::bus::adapters::memory::InMemoryMessageBus;
use crossbar::bus::domain::Message;
use crossbar::bus::ports::MessageHandler;
use crossbar::bus::services::MessageDispatchService;
use crossbar::registry::adapters::InMemoryTypeRegistry;
use crossbar::registry::domain::{Capability, MessageKind, TypeDescriptor};
use crossbar::registry::ports::TypeRegistry;
use eyre::{Result, eyre};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::{Arc, Mutex};

/// Provides a fresh registry seeded with the `commit-created` message kind.
#[fixture]
pub fn registry() -> Arc<InMemoryTypeRegistry> {
    let registry = InMemoryTypeRegistry::new();
    registry
        .register(
            MessageKind::new("commit-created").expect("valid kind"),
            TypeDescriptor::new(Capability::Message).with_declared_field("sha"),
        )
        .expect("registration should succeed");
    Arc::new(registry)
}

/// Provides a fresh bus for each test.
#[fixture]
pub fn bus() -> Arc<InMemoryMessageBus> {
    Arc::new(InMemoryMessageBus::new())
}

/// Builds a dispatch service over the given registry and bus handles.
pub fn dispatch_service(
    registry: &Arc<InMemoryTypeRegistry>,
    bus: &Arc<InMemoryMessageBus>,
) -> MessageDispatchService<InMemoryTypeRegistry, InMemoryMessageBus, DefaultClock> {
    MessageDispatchService::new(Arc::clone(registry), Arc::clone(bus), Arc::new(DefaultClock))
}

/// Parses a kind, converting validation failures into test errors.
pub fn kind(raw: &str) -> Result<MessageKind> {
    MessageKind::new(raw).map_err(|err| eyre!("invalid kind '{raw}': {err}"))
}

/// Handler that records every delivered message for later inspection.
pub struct RecordingHandler {
    delivered: Mutex<Vec<Message>>,
}

impl RecordingHandler {
    /// Creates a recorder behind an `Arc` ready to connect to a bus.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            delivered: Mutex::new(Vec::new()),
        })
    }

    /// Returns the messages delivered so far.
    ///
    /// # Errors
    ///
    /// Returns an error when the recording lock is poisoned.
    pub fn delivered(&self) -> Result<Vec<Message>> {
        self.delivered
            .lock()
            .map(|messages| messages.clone())
            .map_err(|err| eyre!("recording lock poisoned: {err}"))
    }
}

impl MessageHandler for RecordingHandler {
    fn handle(&self, message: &Message) {
        if let Ok(mut delivered) = self.delivered.lock() {
            delivered.push(message.clone());
        }
    }
}
