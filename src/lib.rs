//! # Canvaslet
//!
//! A minimal pannable, zoomable infinite-canvas widget.
//!
//! The canvas is a plain state container (offset, zoom, zoom limits) with
//! a gesture recognizer on top: one-finger pans scroll, two-finger pinches
//! zoom about the pinch center, and releasing a pan starts an inertial
//! coast that decays exponentially until it is spent or a new touch
//! catches the canvas. Rendering composes a tiny command list that the
//! egui widget replays each frame.

pub mod animation;
pub mod core;
pub mod input;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;

pub mod prelude;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    canvas::Canvas,
    config::{CanvasOptions, InertiaOptions},
    geom::Point,
};

pub use crate::input::{
    events::{GestureEvent, GesturePhase, TouchEvent, TouchPhase},
    gestures::{GestureConfig, GestureRecognizer},
    handler::InputHandler,
};

pub use crate::animation::inertia::Inertia;

pub use crate::rendering::scene::{compose, Color, DrawCommand, SceneStyle};

#[cfg(feature = "egui")]
pub use crate::ui::widget::{CanvasWidget, CanvasWidgetConfig, CanvasWidgetExt};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid gesture configuration: {0}")]
    Gesture(String),
}

/// Error type alias for convenience
pub type Error = CanvasError;
