//! Adapter implementations for the registry ports.

pub mod memory;

pub use memory::InMemoryTypeRegistry;
