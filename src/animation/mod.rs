pub mod inertia;

// Re-export commonly used types for convenience
pub use inertia::Inertia;
