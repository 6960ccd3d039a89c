//! Application services for the bus subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! implementing the dispatch workflow over the registry and the bus.

mod dispatch;


pub use dispatch::MessageDispatchService;
