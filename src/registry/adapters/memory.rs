//! In-memory catalogue of registered message kinds.

use crate::registry::{
    domain::{MessageKind, TypeDescriptor},
    ports::{TypeRegistry, TypeRegistryError, TypeRegistryResult},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory message-kind registry.
///
/// Cloning is cheap and every clone shares the same catalogue, so a host
/// can hand one handle to the dispatch service and keep another for
/// registration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTypeRegistry {
    state: Arc<RwLock<RegistryState>>,
}

#[derive(Debug, Default)]
struct RegistryState {
    kinds: HashMap<MessageKind, TypeDescriptor>,
}

impl InMemoryTypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TypeRegistry for InMemoryTypeRegistry {
    fn register(
        &self,
        kind: MessageKind,
        descriptor: TypeDescriptor,
    ) -> TypeRegistryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TypeRegistryError::LockPoisoned(err.to_string()))?;

        if state.kinds.contains_key(&kind) {
            return Err(TypeRegistryError::DuplicateKind(kind));
        }

        tracing::debug!(kind = %kind, capability = %descriptor.capability(), "kind registered");
        state.kinds.insert(kind, descriptor);
        Ok(())
    }

    fn unregister(&self, kind: &MessageKind) -> TypeRegistryResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TypeRegistryError::LockPoisoned(err.to_string()))?;

        if state.kinds.remove(kind).is_none() {
            return Err(TypeRegistryError::KindNotFound(kind.clone()));
        }

        tracing::debug!(kind = %kind, "kind unregistered");
        Ok(())
    }

    fn lookup(&self, kind: &MessageKind) -> Option<TypeDescriptor> {
        // A poisoned catalogue reads as unregistered; resolution has no
        // error channel.
        self.state
            .read()
            .ok()
            .and_then(|state| state.kinds.get(kind).cloned())
    }

    fn registered_kinds(&self) -> Vec<MessageKind> {
        self.state.read().map_or_else(
            |_| Vec::new(),
            |state| {
                let mut kinds: Vec<MessageKind> = state.kinds.keys().cloned().collect();
                kinds.sort();
                kinds
            },
        )
    }
}
