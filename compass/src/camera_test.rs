#![allow(clippy::float_cmp)]

use super::*;

// --- Vec3 ---

#[test]
fn vec3_new() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
    assert_eq!(v.z, 3.0);
}

#[test]
fn vec3_default_is_origin() {
    assert_eq!(Vec3::default(), Vec3::new(0.0, 0.0, 0.0));
}

// --- PerspectiveCamera defaults ---

#[test]
fn camera_default_looks_from_default_distance() {
    let cam = PerspectiveCamera::default();
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 300.0));
    assert_eq!(cam.fov_deg, 30.0);
    assert_eq!(cam.aspect, 1.0);
}

#[test]
fn camera_trait_getters_mirror_fields() {
    let cam = PerspectiveCamera::new(45.0, 2.0, Vec3::new(5.0, -5.0, 10.0));
    assert_eq!(cam.fov_deg(), 45.0);
    assert_eq!(cam.aspect(), 2.0);
    assert_eq!(ViewCamera::position(&cam), Vec3::new(5.0, -5.0, 10.0));
}

// --- Movement ---

#[test]
fn translate_x_moves_only_x() {
    let mut cam = PerspectiveCamera::default();
    cam.translate_x(12.5);
    assert_eq!(cam.position, Vec3::new(12.5, 0.0, 300.0));
}

#[test]
fn translate_y_moves_only_y() {
    let mut cam = PerspectiveCamera::default();
    cam.translate_y(-4.0);
    assert_eq!(cam.position, Vec3::new(0.0, -4.0, 300.0));
}

#[test]
fn translations_accumulate() {
    let mut cam = PerspectiveCamera::default();
    cam.translate_x(1.0);
    cam.translate_x(2.0);
    cam.translate_y(3.0);
    cam.translate_y(-1.0);
    assert_eq!(cam.position.x, 3.0);
    assert_eq!(cam.position.y, 2.0);
}

#[test]
fn set_z_replaces_distance() {
    let mut cam = PerspectiveCamera::default();
    cam.translate_x(7.0);
    cam.set_z(42.0);
    assert_eq!(cam.position, Vec3::new(7.0, 0.0, 42.0));
}
