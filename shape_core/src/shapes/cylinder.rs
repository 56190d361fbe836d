//! # Cylinder
//!
//! A right circular cylinder: a [`Circle`] cross-section extruded by a
//! height. The circle is held as a composed field rather than inherited,
//! so the flat base formula and the cylinder's own total-surface formula
//! are two distinct, unambiguous methods.
//!
//! ## Construction
//!
//! Callers supply only the attributes they care about and rely on defaults
//! for the rest:
//!
//! ```rust
//! use shape_core::shapes::Cylinder;
//!
//! let a = Cylinder::default();                  // height 1.0, default circle
//! let b = Cylinder::new(5.0);                   // height only
//! let c = Cylinder::new(5.0).with_radius(2.0);  // height + radius
//! let d = Cylinder::new(5.0).with_radius(2.0).with_color("blue");
//!
//! assert!((c.volume() - 62.83185).abs() < 1e-4);
//! assert!((c.area() - 87.9646).abs() < 1e-4);
//! # let _ = (a, b, d);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ShapeError, ShapeResult};
use crate::shapes::circle::Circle;

/// A right circular cylinder composed of a base circle and a height.
///
/// `area()` means the *total surface area* (lateral plus both end caps);
/// the flat cross-section area is available separately as `base_area()`.
/// Like [`Circle`], any height is accepted at construction time; use
/// [`Cylinder::validate`] to reject degenerate dimensions explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    /// The circular cross-section (radius and color live here)
    base: Circle,

    /// Height of the extrusion (length units)
    height: f64,
}

impl Cylinder {
    /// Default height when none is given
    pub const DEFAULT_HEIGHT: f64 = 1.0;

    /// Create a cylinder with the given height and a default base circle
    pub fn new(height: f64) -> Self {
        Self {
            base: Circle::default(),
            height,
        }
    }

    /// Set the base radius, consuming self (builder style)
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.base.set_radius(radius);
        self
    }

    /// Set the base color label, consuming self (builder style)
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.base.set_color(color);
        self
    }

    /// Replace the whole base circle, consuming self (builder style)
    pub fn with_base(mut self, base: Circle) -> Self {
        self.base = base;
        self
    }

    /// Get the composed base circle
    pub fn base(&self) -> &Circle {
        &self.base
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the height
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Get the base radius
    pub fn radius(&self) -> f64 {
        self.base.radius()
    }

    /// Set the base radius
    pub fn set_radius(&mut self, radius: f64) {
        self.base.set_radius(radius);
    }

    /// Get the base color label
    pub fn color(&self) -> &str {
        self.base.color()
    }

    /// Set the base color label
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.base.set_color(color);
    }

    /// Flat area of the circular cross-section, π·r².
    ///
    /// Delegates to the composed circle. Not to be confused with
    /// [`Cylinder::area`], which is the total surface area.
    pub fn base_area(&self) -> f64 {
        self.base.area()
    }

    /// Lateral surface area, 2·π·r·h
    pub fn lateral_area(&self) -> f64 {
        self.base.circumference() * self.height
    }

    /// Total surface area: lateral surface plus both end caps,
    /// A = 2·π·r·h + 2·π·r²
    pub fn area(&self) -> f64 {
        self.lateral_area() + 2.0 * self.base_area()
    }

    /// Volume, V = π·r²·h
    pub fn volume(&self) -> f64 {
        self.base_area() * self.height
    }

    /// Validate the base circle and the height.
    ///
    /// Never called implicitly; construction and setters accept any value.
    pub fn validate(&self) -> ShapeResult<()> {
        self.base.validate()?;
        if !self.height.is_finite() {
            return Err(ShapeError::invalid_dimension(
                "height",
                self.height.to_string(),
                "Height must be finite",
            ));
        }
        if self.height < 0.0 {
            return Err(ShapeError::invalid_dimension(
                "height",
                self.height.to_string(),
                "Height must be non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cylinder[{},height={}]", self.base, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn test_cylinder() -> Cylinder {
        Cylinder::new(5.0).with_radius(2.0)
    }

    #[test]
    fn test_default_construction() {
        let cyl = Cylinder::default();
        assert_eq!(cyl.height(), 1.0);
        assert_eq!(cyl.radius(), Circle::DEFAULT_RADIUS);
        assert_eq!(cyl.color(), Circle::DEFAULT_COLOR);
    }

    #[test]
    fn test_height_only_construction() {
        let cyl = Cylinder::new(3.0);
        assert_eq!(cyl.height(), 3.0);
        assert_eq!(cyl.radius(), Circle::DEFAULT_RADIUS);
        assert_eq!(cyl.color(), Circle::DEFAULT_COLOR);
    }

    #[test]
    fn test_height_and_radius_construction() {
        let cyl = Cylinder::new(3.0).with_radius(2.0);
        assert_eq!(cyl.height(), 3.0);
        assert_eq!(cyl.radius(), 2.0);
        assert_eq!(cyl.color(), Circle::DEFAULT_COLOR);
    }

    #[test]
    fn test_full_construction() {
        let cyl = Cylinder::new(3.0).with_radius(2.0).with_color("blue");
        assert_eq!(cyl.height(), 3.0);
        assert_eq!(cyl.radius(), 2.0);
        assert_eq!(cyl.color(), "blue");
    }

    #[test]
    fn test_with_base() {
        let base = Circle::new(4.0).with_color("green");
        let cyl = Cylinder::new(2.0).with_base(base.clone());
        assert_eq!(cyl.base(), &base);
        assert_eq!(cyl.radius(), 4.0);
    }

    #[test]
    fn test_volume() {
        let cyl = test_cylinder();
        // V = π·2²·5 ≈ 62.83185
        assert!((cyl.volume() - 62.83185).abs() < 1e-4);
        assert!((cyl.volume() - PI * 4.0 * 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_surface_area() {
        let cyl = test_cylinder();
        // A = 2π·2·5 + 2π·2² ≈ 87.9646
        assert!((cyl.area() - 87.9646).abs() < 1e-4);
        assert!((cyl.area() - 28.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_base_area_is_flat_formula() {
        let cyl = test_cylinder();
        // base_area is the circle's π·r², never the total-surface figure
        assert!((cyl.base_area() - 4.0 * PI).abs() < 1e-12);
        assert_eq!(cyl.base_area(), cyl.base().area());
        assert!(cyl.base_area() < cyl.area());
    }

    #[test]
    fn test_lateral_area() {
        let cyl = test_cylinder();
        assert!((cyl.lateral_area() - 20.0 * PI).abs() < 1e-12);
        assert!((cyl.area() - (cyl.lateral_area() + 2.0 * cyl.base_area())).abs() < 1e-12);
    }

    #[test]
    fn test_set_height_changes_results() {
        let mut cyl = test_cylinder();
        let area_before = cyl.area();
        let volume_before = cyl.volume();

        cyl.set_height(10.0);

        assert!((cyl.volume() - 2.0 * volume_before).abs() < 1e-9);
        assert!(cyl.area() > area_before);
        // radius and color untouched by the height mutation
        assert_eq!(cyl.radius(), 2.0);
        assert_eq!(cyl.color(), "red");
    }

    #[test]
    fn test_delegating_setters() {
        let mut cyl = Cylinder::default();
        cyl.set_radius(3.0);
        cyl.set_color("yellow");
        assert_eq!(cyl.base().radius(), 3.0);
        assert_eq!(cyl.base().color(), "yellow");
        assert_eq!(cyl.height(), 1.0);
    }

    #[test]
    fn test_display() {
        let cyl = Cylinder::new(5.0).with_radius(2.0);
        assert_eq!(cyl.to_string(), "Cylinder[Circle[radius=2,color=red],height=5]");

        // The base circle's own rendering is nested verbatim
        let rendered = cyl.to_string();
        let inner = cyl.base().to_string();
        assert!(rendered.starts_with("Cylinder["));
        assert!(rendered.contains(&inner));
        assert!(rendered.ends_with(",height=5]"));
    }

    #[test]
    fn test_degenerate_values_accepted() {
        // Permissive by contract: zero and negative dimensions compute through
        let cyl = Cylinder::new(0.0).with_radius(2.0);
        assert_eq!(cyl.volume(), 0.0);

        let cyl = Cylinder::new(-1.0).with_radius(2.0);
        assert!(cyl.volume() < 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(test_cylinder().validate().is_ok());
        assert!(Cylinder::new(0.0).validate().is_ok());

        assert!(Cylinder::new(-1.0).validate().is_err());
        assert!(Cylinder::new(f64::NAN).validate().is_err());
        // A bad base circle fails cylinder validation too
        assert!(Cylinder::new(1.0).with_radius(-2.0).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let cyl = test_cylinder().with_color("blue");
        let json = serde_json::to_string_pretty(&cyl).unwrap();
        let roundtrip: Cylinder = serde_json::from_str(&json).unwrap();
        assert_eq!(cyl, roundtrip);
    }
}
