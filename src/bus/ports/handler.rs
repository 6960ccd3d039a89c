//! Handler port for message delivery callbacks.

use crate::bus::domain::Message;

/// Callback contract for one bus subscription.
///
/// Handlers run synchronously on the publishing thread and must not
/// block. Any `Fn(&Message)` closure satisfies the contract.
pub trait MessageHandler: Send + Sync {
    /// Receives one delivered message.
    fn handle(&self, message: &Message);
}

impl<F> MessageHandler for F
where
    F: Fn(&Message) + Send + Sync,
{
    fn handle(&self, message: &Message) {
        self(message);
    }
}
