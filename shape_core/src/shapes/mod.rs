//! # Shapes
//!
//! The geometric value types. Each shape follows the same pattern:
//!
//! - Named constructor plus consuming `with_*` builder methods, with stated
//!   defaults for every attribute the caller leaves out
//! - Accessor pairs, permissive (no validation on construction or mutation)
//! - Pure derived-quantity methods (`area`, `volume`, ...)
//! - An explicit, opt-in `validate()` for callers that want strict inputs
//! - A deterministic `Display` rendering, composable across nesting levels
//!
//! ## Available Shapes
//!
//! - [`circle`] - Flat circular section (radius, color)
//! - [`cylinder`] - Right circular cylinder (a circle extruded by a height)

pub mod circle;
pub mod cylinder;

// Re-export commonly used types
pub use circle::Circle;
pub use cylinder::Cylinder;
