//! Message factory and dispatch over the registry and publisher ports.

use crate::bus::domain::{FieldValues, Message};
use crate::bus::ports::{MessagePublisher, PublishResult};
use crate::registry::domain::MessageKind;
use crate::registry::ports::TypeRegistry;
use mockable::Clock;
use std::sync::Arc;

/// Uniform construction and publication path for typed messages.
///
/// The service resolves a symbolic identifier against the registry, gates
/// on the message capability, composes the instance, and, for
/// [`send`](Self::send), publishes it. Unresolvable identifiers are a
/// normal outcome surfaced as `None`; no error crosses this boundary for
/// an unknown or non-message kind.
///
/// # Examples
///
/// ```
/// use crossbar::bus::adapters::memory::InMemoryMessageBus;
/// use crossbar::bus::domain::FieldValues;
/// use crossbar::bus::services::MessageDispatchService;
/// use crossbar::registry::adapters::InMemoryTypeRegistry;
/// use crossbar::registry::domain::{Capability, MessageKind, TypeDescriptor};
/// use crossbar::registry::ports::TypeRegistry;
/// use mockable::DefaultClock;
/// use std::sync::Arc;
///
/// let registry = Arc::new(InMemoryTypeRegistry::new());
/// registry
///     .register(
///         MessageKind::new("branch-checked-out").expect("valid kind"),
///         TypeDescriptor::new(Capability::Message).with_declared_field("name"),
///     )
///     .expect("registration should succeed");
///
/// let dispatch = MessageDispatchService::new(
///     registry,
///     Arc::new(InMemoryMessageBus::new()),
///     Arc::new(DefaultClock),
/// );
/// assert!(dispatch.create("branch-checked-out", FieldValues::new()).is_some());
/// assert!(dispatch.create("unknown-kind", FieldValues::new()).is_none());
/// ```
#[derive(Clone)]
pub struct MessageDispatchService<R, P, C>
where
    R: TypeRegistry,
    P: MessagePublisher,
    C: Clock + Send + Sync,
{
    registry: Arc<R>,
    publisher: Arc<P>,
    clock: Arc<C>,
}

impl<R, P, C> MessageDispatchService<R, P, C>
where
    R: TypeRegistry,
    P: MessagePublisher,
    C: Clock + Send + Sync,
{
    /// Creates a new dispatch service.
    #[must_use]
    pub const fn new(registry: Arc<R>, publisher: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            registry,
            publisher,
            clock,
        }
    }

    /// Constructs a message for `identifier` without publishing it.
    ///
    /// Returns `None` when the identifier is not a well-formed kind, is
    /// unregistered, or resolves to a type without the message
    /// capability. All three are recoverable outcomes, never panics or
    /// errors. On success the instance is independent; the service
    /// retains no reference to it. The reserved `id` field is injected
    /// from the identifier, overriding any supplied value.
    #[must_use]
    pub fn create(&self, identifier: &str, fields: FieldValues) -> Option<Message> {
        let Ok(kind) = MessageKind::new(identifier) else {
            tracing::debug!(identifier, "create yielded nothing: malformed kind");
            return None;
        };

        let Some(descriptor) = self.registry.lookup(&kind) else {
            tracing::debug!(kind = %kind, "create yielded nothing: kind unregistered");
            return None;
        };

        if !descriptor.capability().is_message() {
            tracing::debug!(
                kind = %kind,
                capability = %descriptor.capability(),
                "create yielded nothing: kind lacks the message capability"
            );
            return None;
        }

        Some(Message::compose(kind, &descriptor, fields, &*self.clock))
    }

    /// Constructs a message for `identifier` and publishes it.
    ///
    /// When [`create`](Self::create) yields nothing the bus is never
    /// touched and `Ok(None)` is returned; a successful call produces
    /// exactly one publication event carrying the returned message.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`](crate::bus::ports::PublishError) when the
    /// bus fails to publish a constructed message.
    pub fn send(
        &self,
        identifier: &str,
        fields: FieldValues,
    ) -> PublishResult<Option<Message>> {
        let Some(message) = self.create(identifier, fields) else {
            return Ok(None);
        };

        self.publisher.publish(&message)?;
        Ok(Some(message))
    }
}
