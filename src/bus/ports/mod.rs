//! Port contracts for message publication and delivery.

mod handler;
mod publisher;

pub use handler::MessageHandler;
pub use publisher::{MessagePublisher, PublishError, PublishResult};
