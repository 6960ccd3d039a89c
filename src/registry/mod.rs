//! Message-kind catalogue for the crossbar bus.
//!
//! The registry maps symbolic message kinds to type descriptors: the
//! capability tag of the registered type and the set of fields it declares.
//! The dispatch path consults the catalogue read-only; registration and
//! removal are host-application concerns. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
