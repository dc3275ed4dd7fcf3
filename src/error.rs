//! Error types for strict geometry construction.

use thiserror::Error;

use crate::*;

/// Geometry that cannot produce meaningful intersections.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Quad edge vectors are parallel or zero, so the quad has no area.
    #[error("degenerate quad: edges {u} and {v} span no area")]
    DegenerateQuad { u: Vector, v: Vector },

    /// Sphere radius is negative, NaN or infinite.
    #[error("invalid sphere radius: {0}")]
    InvalidRadius(Float),
}

/// Result type for geometry construction.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;
