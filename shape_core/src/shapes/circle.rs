//! # Circle
//!
//! The circular cross-section value type: a radius plus a color label.
//! `Circle` is both a usable flat shape on its own and the base section
//! that [`Cylinder`](crate::shapes::cylinder::Cylinder) is built from.
//!
//! ## Defaults
//!
//! - radius: 1.0
//! - color: "red"
//!
//! ## Example
//!
//! ```rust
//! use shape_core::shapes::Circle;
//!
//! let circle = Circle::new(2.0).with_color("blue");
//! assert!((circle.area() - 12.566).abs() < 0.001);
//! assert_eq!(circle.to_string(), "Circle[radius=2,color=blue]");
//! ```

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ShapeError, ShapeResult};

/// A circle with a radius and a color label.
///
/// Plain value object: no identity beyond its fields, freely cloned and
/// compared. Any radius is accepted at construction time, including zero
/// and negative values; use [`Circle::validate`] to reject those
/// explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Radius (length units)
    radius: f64,

    /// Color label (free text, e.g. "red", "blue")
    color: String,
}

impl Circle {
    /// Default radius when none is given
    pub const DEFAULT_RADIUS: f64 = 1.0;

    /// Default color label when none is given
    pub const DEFAULT_COLOR: &'static str = "red";

    /// Create a circle with the given radius and the default color
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }

    /// Set the color label, consuming self (builder style)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Get the radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    /// Get the color label
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Set the color label
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Flat area of the circle, A = π·r²
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference, C = 2·π·r
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Diameter, d = 2·r
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Validate the radius.
    ///
    /// Never called implicitly; construction and setters accept any value.
    pub fn validate(&self) -> ShapeResult<()> {
        if !self.radius.is_finite() {
            return Err(ShapeError::invalid_dimension(
                "radius",
                self.radius.to_string(),
                "Radius must be finite",
            ));
        }
        if self.radius < 0.0 {
            return Err(ShapeError::invalid_dimension(
                "radius",
                self.radius.to_string(),
                "Radius must be non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle[radius={},color={}]", self.radius, self.color)
    }
}
