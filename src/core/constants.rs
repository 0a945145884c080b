//! Core constants mirrored from the UIKit scroll-view conventions this
//! widget grew out of. Keeping them in a single place makes it easier to
//! tweak engine-wide magic numbers.

/// Lowest zoom factor the canvas will clamp to.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Highest zoom factor the canvas will clamp to.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;

/// Friction coefficient for inertial panning (per second).
/// Matches UIKit's `UIDynamicItemBehavior` resistance of 2.
pub const DEFAULT_RESISTANCE: f64 = 2.0;

/// Inertia is dropped once speed falls below this (world units per second).
pub const DEFAULT_STOP_VELOCITY: f64 = 0.5;

/// Fling speed cap in screen points per second (Android-style sanity limit).
pub const MAX_FLING_SPEED: f64 = 8000.0;

/// A touch must travel this many screen points before it counts as a pan.
pub const TOUCH_SLOP: f64 = 8.0;

/// How far back the recognizer looks when estimating release velocity.
pub const VELOCITY_WINDOW_MS: u64 = 100;

/// On-screen radius of the origin marker at zoom 1.
pub const MARKER_RADIUS: f64 = 10.0;
