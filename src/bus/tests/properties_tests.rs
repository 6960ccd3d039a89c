//! Unit tests for the properties namespace.

use crate::bus::domain::Properties;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn new_namespace_is_empty() {
    let properties = Properties::new();
    assert!(properties.is_empty());
    assert_eq!(properties.len(), 0);
    assert!(properties.get("anything").is_none());
}

#[rstest]
fn insert_stores_and_replaces_values() {
    let mut properties = Properties::new();
    properties.insert("author", json!("jane"));
    properties.insert("author", json!("joan"));

    assert_eq!(properties.len(), 1);
    assert_eq!(properties.get("author"), Some(&json!("joan")));
    assert!(properties.contains("author"));
}
