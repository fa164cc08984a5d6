//! Zoom configuration.
//!
//! The clamp range is expressed as camera distances: `near_z` is the closest
//! the camera may get (most zoomed in) and `far_z` the farthest (most zoomed
//! out).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FAR_Z, DEFAULT_NEAR_Z, DEFAULT_ZOOM_STEP};
use crate::error::CompassError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoomConfig {
    /// Minimum camera z.
    pub near_z: f64,
    /// Maximum camera z.
    pub far_z: f64,
    /// Camera z change per unit of wheel `deltaY`.
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { near_z: DEFAULT_NEAR_Z, far_z: DEFAULT_FAR_Z, step: DEFAULT_ZOOM_STEP }
    }
}

impl ZoomConfig {
    /// Build a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`CompassError::InvalidZoomRange`] unless `0 < near_z < far_z`
    /// (both finite), and [`CompassError::InvalidZoomStep`] unless `step` is
    /// positive and finite.
    pub fn new(near_z: f64, far_z: f64, step: f64) -> Result<Self, CompassError> {
        let config = Self { near_z, far_z, step };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object such as `{"near_z": 5, "far_z": 500}`. Missing
    /// fields keep their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CompassError::ConfigParse`] for malformed JSON and the
    /// validation errors of [`ZoomConfig::new`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, CompassError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the rules `new` enforces.
    ///
    /// # Errors
    ///
    /// See [`ZoomConfig::new`].
    pub fn validate(&self) -> Result<(), CompassError> {
        let range_ok = self.near_z.is_finite()
            && self.far_z.is_finite()
            && self.near_z > 0.0
            && self.near_z < self.far_z;
        if !range_ok {
            return Err(CompassError::InvalidZoomRange { near_z: self.near_z, far_z: self.far_z });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(CompassError::InvalidZoomStep(self.step));
        }
        Ok(())
    }

    /// Clamp a candidate camera z into `[near_z, far_z]`.
    #[must_use]
    pub fn clamp_z(&self, z: f64) -> f64 {
        if z < self.near_z {
            self.near_z
        } else if z > self.far_z {
            self.far_z
        } else {
            z
        }
    }
}
