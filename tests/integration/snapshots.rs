//! Integration tests for JSON snapshots through the root crate

use exclass::{ExampleClass, ModelError};

#[test]
fn test_snapshot_restores_instance() {
    let mut instance = ExampleClass::new();
    instance.set_name("widget");
    instance.add_value(3);
    instance.add_value(-1);
    instance.add_value(3);

    let restored = ExampleClass::from_json(&instance.to_json().unwrap()).unwrap();
    assert_eq!(restored, instance);
    assert_eq!(restored.values(), &[3, -1, 3]);
}

#[test]
fn test_pretty_snapshot_decodes() {
    let mut instance = ExampleClass::new();
    instance.set_name("pretty");
    instance.add_value(42);

    let pretty = instance.to_json_pretty().unwrap();
    assert!(pretty.lines().count() > 1);
    assert_eq!(ExampleClass::from_json(&pretty).unwrap(), instance);
}

#[test]
fn test_wrong_type_is_snapshot_error() {
    let result = ExampleClass::from_json(r#"{"name":1}"#);
    match result {
        Err(ModelError::Snapshot(_)) => {} // Expected
        other => panic!("Expected snapshot error, got {other:?}"),
    }
}

#[test]
fn test_restored_instance_keeps_appending() {
    let mut instance = ExampleClass::from_json(r#"{"name":"n","values":[1]}"#).unwrap();
    instance.add_value(2);
    assert_eq!(instance.values(), &[1, 2]);
}
