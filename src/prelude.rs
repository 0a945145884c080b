//! Prelude module for common canvaslet types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use canvaslet::prelude::*;`

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
pub use crate::ui::{
    widget::{CanvasWidget, CanvasWidgetConfig},
    CanvasWidgetExt,
};

pub use crate::{Error as CanvasError, Result};

pub use std::time::Duration;

pub use instant::Instant;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
