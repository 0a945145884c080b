//! Configuration for canvas behavior tuning
//!
//! Options are split by concern: zoom bounds on the canvas itself and
//! friction tuning for inertial panning. Both carry defaults tuned for a
//! UIKit-like scroll feel and validate before use.

use crate::{
    core::constants::{
        DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_RESISTANCE, DEFAULT_STOP_VELOCITY,
    },
    CanvasError, Result,
};

/// Zoom limits applied by every zoom mutation on a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasOptions {
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl CanvasOptions {
    pub fn new(min_zoom: f64, max_zoom: f64) -> Self {
        Self { min_zoom, max_zoom }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_zoom.is_finite() || !self.max_zoom.is_finite() {
            return Err(CanvasError::InvalidConfig("zoom limits must be finite".into()).into());
        }
        if self.min_zoom <= 0.0 {
            return Err(CanvasError::InvalidConfig("min_zoom must be positive".into()).into());
        }
        if self.min_zoom > self.max_zoom {
            return Err(
                CanvasError::InvalidConfig("min_zoom must not exceed max_zoom".into()).into(),
            );
        }
        Ok(())
    }
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

/// Friction tuning for the coast after a released pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaOptions {
    /// Fraction of velocity removed per second.
    pub resistance: f64,
    /// Speed below which the coast is considered finished (world units/s).
    pub stop_velocity: f64,
}

impl InertiaOptions {
    pub fn new(resistance: f64, stop_velocity: f64) -> Self {
        Self {
            resistance,
            stop_velocity,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.resistance.is_finite() && self.resistance > 0.0) {
            return Err(CanvasError::InvalidConfig("resistance must be positive".into()).into());
        }
        if !(self.stop_velocity.is_finite() && self.stop_velocity > 0.0) {
            return Err(CanvasError::InvalidConfig("stop_velocity must be positive".into()).into());
        }
        Ok(())
    }
}

impl Default for InertiaOptions {
    fn default() -> Self {
        Self {
            resistance: DEFAULT_RESISTANCE,
            stop_velocity: DEFAULT_STOP_VELOCITY,
        }
    }
}
