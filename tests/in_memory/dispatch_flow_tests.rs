//! Factory-to-delivery flows across live registry changes.

use super::helpers::{RecordingHandler, bus, dispatch_service, kind, registry};
use crossbar::bus::adapters::memory::InMemoryMessageBus;
use crossbar::bus::domain::FieldValues;
use crossbar::bus::ports::MessageHandler;
use crossbar::registry::adapters::InMemoryTypeRegistry;
use crossbar::registry::domain::{Capability, TypeDescriptor};
use crossbar::registry::ports::TypeRegistry;
use eyre::{OptionExt, Result};
use rstest::rstest;
use serde_json::json;
use std::sync::Arc;

#[rstest]
fn send_delivers_the_returned_message(
    registry: Arc<InMemoryTypeRegistry>,
    bus: Arc<InMemoryMessageBus>,
) -> Result<()> {
    let recorder = RecordingHandler::new();
    bus.connect(
        kind("commit-created")?,
        Arc::clone(&recorder) as Arc<dyn MessageHandler>,
    )?;
    let dispatch = dispatch_service(&registry, &bus);

    let message = dispatch
        .send(
            "commit-created",
            FieldValues::new().with("sha", json!("abc123")),
        )?
        .ok_or_eyre("registered kind should construct")?;

    let delivered = recorder.delivered()?;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered.first(), Some(&message));
    Ok(())
}

#[rstest]
fn kinds_registered_after_service_creation_are_live(
    registry: Arc<InMemoryTypeRegistry>,
    bus: Arc<InMemoryMessageBus>,
) -> Result<()> {
    let dispatch = dispatch_service(&registry, &bus);
    assert!(dispatch.create("branch-deleted", FieldValues::new()).is_none());

    registry.register(
        kind("branch-deleted")?,
        TypeDescriptor::new(Capability::Message).with_declared_field("name"),
    )?;

    assert!(dispatch.create("branch-deleted", FieldValues::new()).is_some());
    Ok(())
}

#[rstest]
fn kinds_route_to_their_own_subscribers(
    registry: Arc<InMemoryTypeRegistry>,
    bus: Arc<InMemoryMessageBus>,
) -> Result<()> {
    registry.register(
        kind("branch-deleted")?,
        TypeDescriptor::new(Capability::Message),
    )?;
    let commits = RecordingHandler::new();
    let branches = RecordingHandler::new();
    bus.connect(
        kind("commit-created")?,
        Arc::clone(&commits) as Arc<dyn MessageHandler>,
    )?;
    bus.connect(
        kind("branch-deleted")?,
        Arc::clone(&branches) as Arc<dyn MessageHandler>,
    )?;
    let dispatch = dispatch_service(&registry, &bus);

    dispatch.send("commit-created", FieldValues::new())?;
    dispatch.send("branch-deleted", FieldValues::new())?;
    dispatch.send("branch-deleted", FieldValues::new())?;

    assert_eq!(commits.delivered()?.len(), 1);
    assert_eq!(branches.delivered()?.len(), 2);
    Ok(())
}
