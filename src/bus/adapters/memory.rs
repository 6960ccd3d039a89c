//! In-memory publish-subscribe bus with synchronous delivery.

use crate::bus::{
    domain::{Message, SubscriberId},
    ports::{MessageHandler, MessagePublisher, PublishError, PublishResult},
};
use crate::registry::domain::MessageKind;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory message bus.
///
/// Subscriptions are keyed by message kind and delivered in registration
/// order on the publishing thread. Cloning is cheap and every clone shares
/// the same subscription table.
#[derive(Clone, Default)]
pub struct InMemoryMessageBus {
    state: Arc<RwLock<BusState>>,
}

#[derive(Default)]
struct BusState {
    order: HashMap<MessageKind, Vec<SubscriberId>>,
    subscriptions: HashMap<SubscriberId, Subscription>,
}

struct Subscription {
    kind: MessageKind,
    handler: Arc<dyn MessageHandler>,
}

impl InMemoryMessageBus {
    /// Creates a bus with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a handler to one message kind.
    ///
    /// The returned token addresses the subscription for
    /// [`disconnect`](Self::disconnect).
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::LockPoisoned`] when the subscription table
    /// is unusable.
    pub fn connect(
        &self,
        kind: MessageKind,
        handler: Arc<dyn MessageHandler>,
    ) -> PublishResult<SubscriberId> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PublishError::LockPoisoned(err.to_string()))?;

        let id = SubscriberId::new();
        state.order.entry(kind.clone()).or_default().push(id);
        state.subscriptions.insert(id, Subscription { kind, handler });
        Ok(id)
    }

    /// Disconnects one subscription.
    ///
    /// Returns `false` when the token is unknown, which is a normal
    /// outcome for an already-disconnected subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::LockPoisoned`] when the subscription table
    /// is unusable.
    pub fn disconnect(&self, id: SubscriberId) -> PublishResult<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|err| PublishError::LockPoisoned(err.to_string()))?;

        let Some(subscription) = state.subscriptions.remove(&id) else {
            return Ok(false);
        };

        if let Some(order) = state.order.get_mut(&subscription.kind) {
            order.retain(|subscriber| *subscriber != id);
        }
        Ok(true)
    }

    /// Returns the number of handlers connected to `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::LockPoisoned`] when the subscription table
    /// is unusable.
    pub fn subscriber_count(&self, kind: &MessageKind) -> PublishResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| PublishError::LockPoisoned(err.to_string()))?;
        Ok(state.order.get(kind).map_or(0, Vec::len))
    }
}

impl MessagePublisher for InMemoryMessageBus {
    fn publish(&self, message: &Message) -> PublishResult<()> {
        let recipients: Vec<Arc<dyn MessageHandler>> = {
            let state = self
                .state
                .read()
                .map_err(|err| PublishError::LockPoisoned(err.to_string()))?;
            state.order.get(message.kind()).map_or_else(Vec::new, |ids| {
                ids.iter()
                    .filter_map(|id| state.subscriptions.get(id))
                    .map(|subscription| Arc::clone(&subscription.handler))
                    .collect()
            })
        };

        // Delivery happens outside the lock so handlers may connect or
        // disconnect reentrantly.
        tracing::debug!(
            kind = %message.kind(),
            recipients = recipients.len(),
            "publishing message"
        );
        for handler in recipients {
            handler.handle(message);
        }
        Ok(())
    }
}
