use crate::core::{canvas::Canvas, constants::MARKER_RADIUS, geom::Point};
use serde::{Deserialize, Serialize};

#[cfg(feature = "egui")]
use egui::Color32;

/// Serializable color type that can convert to/from egui::Color32
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(feature = "egui")]
impl From<Color32> for Color {
    fn from(color: Color32) -> Self {
        Self {
            r: color.r(),
            g: color.g(),
            b: color.b(),
            a: color.a(),
        }
    }
}

#[cfg(feature = "egui")]
impl From<Color> for Color32 {
    fn from(color: Color) -> Self {
        Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Visual style of the composed scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneStyle {
    /// Background fill
    pub background: Color,
    /// Fill color of the origin marker
    pub marker_color: Color,
    /// Marker radius at zoom 1, in screen points
    pub marker_radius: f64,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(248, 248, 248),
            marker_color: Color::rgb(255, 0, 0),
            marker_radius: MARKER_RADIUS,
        }
    }
}

/// Commands the host paints in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole view
    Background { color: Color },
    /// Filled circle at a screen position
    Circle {
        center: Point,
        radius: f64,
        color: Color,
    },
}

/// Composes the draw list for the current canvas state: the background
/// fill, then the origin marker at its screen position with its radius
/// scaled by the zoom.
pub fn compose(canvas: &Canvas, style: &SceneStyle) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Background {
            color: style.background,
        },
        DrawCommand::Circle {
            center: canvas.world_to_screen(&Point::default()),
            radius: style.marker_radius * canvas.zoom(),
            color: style.marker_color,
        },
    ]
}
