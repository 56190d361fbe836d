//! # Error Types
//!
//! Structured error types for shape_core. Construction and mutation are
//! deliberately permissive (degenerate dimensions are accepted and simply
//! produce degenerate areas and volumes), so errors only arise from the
//! explicit `validate()` methods on the shape types.
//!
//! ## Example
//!
//! ```rust
//! use shape_core::errors::{ShapeError, ShapeResult};
//!
//! fn check_height(height: f64) -> ShapeResult<()> {
//!     if height < 0.0 {
//!         return Err(ShapeError::invalid_dimension(
//!             "height",
//!             height.to_string(),
//!             "Height must be non-negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for shape_core operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Structured error type for shape validation.
///
/// Each variant carries enough context to report which dimension was
/// rejected and why, without the caller re-deriving it.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ShapeError {
    /// A dimension value is unusable (negative, NaN, infinite)
    #[error("Invalid dimension '{field}': {value} - {reason}")]
    InvalidDimension {
        field: String,
        value: String,
        reason: String,
    },
}

impl ShapeError {
    /// Create an InvalidDimension error
    pub fn invalid_dimension(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ShapeError::InvalidDimension {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ShapeError::InvalidDimension { .. } => "INVALID_DIMENSION",
        }
    }
}
