pub mod events;
pub mod gestures;
pub mod handler;

// Re-export the essential types
pub use events::{GestureEvent, GesturePhase, TouchEvent, TouchPhase};
pub use gestures::{GestureConfig, GestureRecognizer};
pub use handler::InputHandler;
