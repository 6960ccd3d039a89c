//! Crossbar: a typed in-process message bus for extension surfaces.
//!
//! This crate provides the message plumbing a host application exposes to
//! its extensions: a catalogue of registered message kinds, a factory and
//! dispatch path for constructing and publishing typed messages, and an
//! in-memory publish-subscribe bus with synchronous delivery.
//!
//! # Architecture
//!
//! Crossbar follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory registry and bus)
//!
//! # Modules
//!
//! - [`registry`]: Message-kind catalogue and type descriptors
//! - [`bus`]: Message construction, dispatch, and publication

pub mod bus;
pub mod registry;
