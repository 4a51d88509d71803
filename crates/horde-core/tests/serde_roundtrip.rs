#![cfg(feature = "serde")]

use horde_core::{PlayerSnapshot, Vec2};

#[test]
fn vec2_serializes_as_xy_object() {
    let json = serde_json::to_string(&Vec2::new(1.5, -2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
}

#[test]
fn player_snapshot_roundtrip() {
    let snapshot = PlayerSnapshot::new(Vec2::new(640.0, 512.0), 3);
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: PlayerSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
