#![allow(clippy::float_cmp)]

use super::*;

// --- Defaults ---

#[test]
fn default_zoom_options() {
    let cfg = ZoomConfig::default();
    assert_eq!(cfg.near_z, 2.0);
    assert_eq!(cfg.far_z, 10_000.0);
    assert_eq!(cfg.step, 0.06);
}

#[test]
fn default_is_valid() {
    assert!(ZoomConfig::default().validate().is_ok());
}

// --- new ---

#[test]
fn new_accepts_valid_range() {
    let cfg = ZoomConfig::new(1.0, 50.0, 0.5).unwrap();
    assert_eq!(cfg, ZoomConfig { near_z: 1.0, far_z: 50.0, step: 0.5 });
}

#[test]
fn new_rejects_inverted_range() {
    let err = ZoomConfig::new(100.0, 10.0, 0.06).unwrap_err();
    assert!(matches!(err, CompassError::InvalidZoomRange { .. }));
}

#[test]
fn new_rejects_equal_bounds() {
    let err = ZoomConfig::new(10.0, 10.0, 0.06).unwrap_err();
    assert!(matches!(err, CompassError::InvalidZoomRange { .. }));
}

#[test]
fn new_rejects_non_positive_near() {
    assert!(matches!(ZoomConfig::new(0.0, 10.0, 0.06), Err(CompassError::InvalidZoomRange { .. })));
    assert!(matches!(ZoomConfig::new(-1.0, 10.0, 0.06), Err(CompassError::InvalidZoomRange { .. })));
}

#[test]
fn new_rejects_infinite_far() {
    let err = ZoomConfig::new(1.0, f64::INFINITY, 0.06).unwrap_err();
    assert!(matches!(err, CompassError::InvalidZoomRange { .. }));
}

#[test]
fn new_rejects_bad_step() {
    assert!(matches!(ZoomConfig::new(1.0, 10.0, 0.0), Err(CompassError::InvalidZoomStep(_))));
    assert!(matches!(ZoomConfig::new(1.0, 10.0, -0.1), Err(CompassError::InvalidZoomStep(_))));
    assert!(matches!(ZoomConfig::new(1.0, 10.0, f64::NAN), Err(CompassError::InvalidZoomStep(_))));
}

#[test]
fn range_error_message_names_both_bounds() {
    let err = ZoomConfig::new(9.0, 3.0, 0.06).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("near_z 9"));
    assert!(msg.contains("far_z 3"));
}

// --- from_json ---

#[test]
fn from_json_full_object() {
    let cfg = ZoomConfig::from_json(r#"{"near_z": 5, "far_z": 500, "step": 0.1}"#).unwrap();
    assert_eq!(cfg, ZoomConfig { near_z: 5.0, far_z: 500.0, step: 0.1 });
}

#[test]
fn from_json_missing_fields_use_defaults() {
    let cfg = ZoomConfig::from_json(r#"{"far_z": 800}"#).unwrap();
    assert_eq!(cfg.near_z, 2.0);
    assert_eq!(cfg.far_z, 800.0);
    assert_eq!(cfg.step, 0.06);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ZoomConfig::from_json("{}").unwrap(), ZoomConfig::default());
}

#[test]
fn from_json_malformed_is_parse_error() {
    let err = ZoomConfig::from_json("{near_z:").unwrap_err();
    assert!(matches!(err, CompassError::ConfigParse(_)));
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = ZoomConfig::from_json(r#"{"minZoom": 500}"#).unwrap_err();
    assert!(matches!(err, CompassError::ConfigParse(_)));
    assert!(err.to_string().contains("minZoom"), "{err}");
}

#[test]
fn from_json_rejects_camel_case_range_keys() {
    let result = ZoomConfig::from_json(r#"{"minZoom": 500, "maxZoom": 50, "step": 1}"#);
    assert!(matches!(result, Err(CompassError::ConfigParse(_))));
}

#[test]
fn from_json_validates_values() {
    let err = ZoomConfig::from_json(r#"{"near_z": 20000}"#).unwrap_err();
    assert!(matches!(err, CompassError::InvalidZoomRange { .. }));
}

#[test]
fn serializes_field_names() {
    let json = serde_json::to_value(ZoomConfig::default()).unwrap();
    assert_eq!(json["near_z"], 2.0);
    assert_eq!(json["far_z"], 10_000.0);
    assert_eq!(json["step"], 0.06);
}

// --- clamp_z ---

#[test]
fn clamp_z_inside_range_is_unchanged() {
    let cfg = ZoomConfig::default();
    assert_eq!(cfg.clamp_z(300.0), 300.0);
}

#[test]
fn clamp_z_below_near_snaps_to_near() {
    let cfg = ZoomConfig::default();
    assert_eq!(cfg.clamp_z(-50.0), 2.0);
}

#[test]
fn clamp_z_above_far_snaps_to_far() {
    let cfg = ZoomConfig::default();
    assert_eq!(cfg.clamp_z(1e9), 10_000.0);
}

#[test]
fn clamp_z_bounds_are_inclusive() {
    let cfg = ZoomConfig::default();
    assert_eq!(cfg.clamp_z(2.0), 2.0);
    assert_eq!(cfg.clamp_z(10_000.0), 10_000.0);
}
