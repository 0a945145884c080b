pub mod canvas;
pub mod config;
pub mod constants;
pub mod geom;

// Re-export the essential types
pub use canvas::Canvas;
pub use config::{CanvasOptions, InertiaOptions};
pub use geom::Point;
