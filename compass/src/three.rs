//! Bindings to a host-owned `THREE.PerspectiveCamera`.
//!
//! Only the members the controller needs are imported. The handle is a
//! reference to the JS object, so moves made through it are visible to the
//! host's render loop immediately.

use wasm_bindgen::prelude::*;

use crate::camera::{Vec3, ViewCamera};

#[wasm_bindgen]
extern "C" {
    /// A `THREE.PerspectiveCamera` (or anything with the same shape).
    #[derive(Debug, Clone)]
    pub type ThreeCamera;

    #[wasm_bindgen(method, getter)]
    fn fov(this: &ThreeCamera) -> f64;

    #[wasm_bindgen(method, getter)]
    fn aspect(this: &ThreeCamera) -> f64;

    #[wasm_bindgen(method, getter)]
    fn position(this: &ThreeCamera) -> ThreeVector3;

    #[wasm_bindgen(method, js_name = translateX)]
    fn translate_x_local(this: &ThreeCamera, distance: f64);

    #[wasm_bindgen(method, js_name = translateY)]
    fn translate_y_local(this: &ThreeCamera, distance: f64);

    /// A `THREE.Vector3`.
    #[derive(Debug, Clone)]
    pub type ThreeVector3;

    #[wasm_bindgen(method, getter)]
    fn x(this: &ThreeVector3) -> f64;

    #[wasm_bindgen(method, getter)]
    fn y(this: &ThreeVector3) -> f64;

    #[wasm_bindgen(method, getter)]
    fn z(this: &ThreeVector3) -> f64;

    #[wasm_bindgen(method, js_name = setZ)]
    fn set_z_component(this: &ThreeVector3, z: f64);
}

impl ViewCamera for ThreeCamera {
    fn fov_deg(&self) -> f64 {
        self.fov()
    }

    fn aspect(&self) -> f64 {
        ThreeCamera::aspect(self)
    }

    fn position(&self) -> Vec3 {
        let p = ThreeCamera::position(self);
        Vec3::new(p.x(), p.y(), p.z())
    }

    fn translate_x(&mut self, distance: f64) {
        self.translate_x_local(distance);
    }

    fn translate_y(&mut self, distance: f64) {
        self.translate_y_local(distance);
    }

    fn set_z(&mut self, z: f64) {
        ThreeCamera::position(self).set_z_component(z);
    }
}
