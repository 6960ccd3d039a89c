//! Adapter implementations for the bus ports.

pub mod memory;

pub use memory::InMemoryMessageBus;
