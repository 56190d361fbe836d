//! # shape_core - Geometric Value Types
//!
//! `shape_core` provides small, plain geometric value types with a clean,
//! JSON-serializable API: a flat [`Circle`] section and a [`Cylinder`]
//! solid composed from it.
//!
//! ## Design Philosophy
//!
//! - **Value objects**: no identity beyond attribute state, freely cloned
//! - **Composition over inheritance**: a cylinder holds its base circle as
//!   a field, so the flat base-area formula and the cylinder's
//!   total-surface-area formula are separate, unambiguous methods
//! - **Permissive inputs**: degenerate dimensions are accepted and compute
//!   through; strict checking is an explicit `validate()` call away
//! - **JSON-First**: all types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_core::Cylinder;
//!
//! let cylinder = Cylinder::new(5.0).with_radius(2.0);
//!
//! assert!((cylinder.volume() - 62.83185).abs() < 1e-4);
//! assert!((cylinder.area() - 87.9646).abs() < 1e-4);
//! assert_eq!(
//!     cylinder.to_string(),
//!     "Cylinder[Circle[radius=2,color=red],height=5]"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`shapes`] - The shape value types (circle, cylinder)
//! - [`errors`] - Structured error types

pub mod errors;
pub mod shapes;

// Re-export commonly used types at crate root for convenience
pub use errors::{ShapeError, ShapeResult};
pub use shapes::{Circle, Cylinder};
