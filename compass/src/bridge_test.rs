use super::*;

// =============================================================
// parse_level
// =============================================================

#[test]
fn parse_level_defaults_to_info() {
    assert_eq!(parse_level(None), log::Level::Info);
}

#[test]
fn parse_level_accepts_known_names() {
    assert_eq!(parse_level(Some("debug")), log::Level::Debug);
    assert_eq!(parse_level(Some("trace")), log::Level::Trace);
    assert_eq!(parse_level(Some("error")), log::Level::Error);
}

#[test]
fn parse_level_is_case_insensitive() {
    assert_eq!(parse_level(Some("WARN")), log::Level::Warn);
}

#[test]
fn parse_level_falls_back_on_garbage() {
    assert_eq!(parse_level(Some("bogus")), log::Level::Info);
    assert_eq!(parse_level(Some("")), log::Level::Info);
}

// =============================================================
// Return value conversions
// =============================================================

#[test]
fn point_from_each_space_keeps_components() {
    let expected = JsPoint { x: 1.5, y: -2.0 };
    assert_eq!(JsPoint::from(ScenePoint::new(1.5, -2.0)), expected);
    assert_eq!(JsPoint::from(SceneOffset::new(1.5, -2.0)), expected);
    assert_eq!(JsPoint::from(SurfacePixel::new(1.5, -2.0)), expected);
    assert_eq!(JsPoint::from(SignedPercent::new(1.5, -2.0)), expected);
    assert_eq!(JsPoint::from(AbsPercent::new(1.5, -2.0)), expected);
}

#[test]
fn bounds_keep_min_and_max_per_axis() {
    let b = JsBounds::from(WorldBounds { min_x: -10.0, max_x: 10.0, min_y: -5.0, max_y: 5.0 });
    assert_eq!(b, JsBounds { min_x: -10.0, max_x: 10.0, min_y: -5.0, max_y: 5.0 });
}

#[test]
fn size_reports_full_extents() {
    let s = JsSize::from(HalfExtents { half_width: 40.0, half_height: 25.0 });
    assert_eq!(s, JsSize { width: 80.0, height: 50.0 });
}
