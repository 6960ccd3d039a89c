//! Connect/disconnect lifecycle on the live bus.

use super::helpers::{RecordingHandler, bus, dispatch_service, kind, registry};
use crossbar::bus::adapters::memory::InMemoryMessageBus;
use crossbar::bus::domain::FieldValues;
use crossbar::bus::ports::MessageHandler;
use crossbar::registry::adapters::InMemoryTypeRegistry;
use eyre::Result;
use rstest::rstest;
use std::sync::Arc;

#[rstest]
fn disconnect_mid_stream_stops_delivery(
    registry: Arc<InMemoryTypeRegistry>,
    bus: Arc<InMemoryMessageBus>,
) -> Result<()> {
    let recorder = RecordingHandler::new();
    let subscription = bus.connect(
        kind("commit-created")?,
        Arc::clone(&recorder) as Arc<dyn MessageHandler>,
    )?;
    let dispatch = dispatch_service(&registry, &bus);

    dispatch.send("commit-created", FieldValues::new())?;
    assert!(bus.disconnect(subscription)?);
    dispatch.send("commit-created", FieldValues::new())?;

    assert_eq!(recorder.delivered()?.len(), 1);
    Ok(())
}

#[rstest]
fn every_subscriber_of_a_kind_receives(
    registry: Arc<InMemoryTypeRegistry>,
    bus: Arc<InMemoryMessageBus>,
) -> Result<()> {
    let first = RecordingHandler::new();
    let second = RecordingHandler::new();
    bus.connect(
        kind("commit-created")?,
        Arc::clone(&first) as Arc<dyn MessageHandler>,
    )?;
    bus.connect(
        kind("commit-created")?,
        Arc::clone(&second) as Arc<dyn MessageHandler>,
    )?;
    let dispatch = dispatch_service(&registry, &bus);

    dispatch.send("commit-created", FieldValues::new())?;

    assert_eq!(first.delivered()?.len(), 1);
    assert_eq!(second.delivered()?.len(), 1);
    Ok(())
}

#[rstest]
fn second_disconnect_is_a_no_op(bus: Arc<InMemoryMessageBus>) -> Result<()> {
    let recorder = RecordingHandler::new();
    let subscription = bus.connect(
        kind("commit-created")?,
        Arc::clone(&recorder) as Arc<dyn MessageHandler>,
    )?;

    assert!(bus.disconnect(subscription)?);
    assert!(!bus.disconnect(subscription)?);
    Ok(())
}
