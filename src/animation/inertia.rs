use crate::core::{config::InertiaOptions, geom::Point};

/// Inertial coast of the canvas offset after a released pan.
///
/// The velocity lives in world units per second (the screen-space release
/// velocity is divided by the zoom once, when the coast starts) and decays
/// as `v(t) = v0 * exp(-resistance * t)`, the closed form of removing
/// `resistance` of the remaining velocity per second. The exponential form
/// stays stable across long frame gaps, where a forward Euler step with
/// `resistance * dt > 1` would overshoot and reverse direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inertia {
    velocity: Point,
    resistance: f64,
    stop_velocity: f64,
}

impl Inertia {
    /// Starts a coast with the given world-space velocity
    pub fn new(velocity: Point, options: &InertiaOptions) -> Self {
        Self {
            velocity,
            resistance: options.resistance,
            stop_velocity: options.stop_velocity,
        }
    }

    /// Advances the coast by `dt` seconds: decays the velocity, then
    /// returns the world-space step to translate the canvas by.
    /// Non-positive `dt` is a no-op.
    pub fn advance(&mut self, dt: f64) -> Point {
        if !dt.is_finite() || dt <= 0.0 {
            return Point::default();
        }
        self.velocity = self.velocity.multiply((-self.resistance * dt).exp());
        self.velocity.multiply(dt)
    }

    /// Whether the coast has slowed below the stop threshold
    pub fn is_spent(&self) -> bool {
        self.velocity.length() < self.stop_velocity
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }
}
