pub mod scene;

// Re-export main types
pub use scene::{compose, Color, DrawCommand, SceneStyle};
