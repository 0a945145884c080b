pub mod widget;

pub use widget::{CanvasWidget, CanvasWidgetConfig, CanvasWidgetExt};
